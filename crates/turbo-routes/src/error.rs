//! Error types for named route resolution.

use thiserror::Error;

/// Result type for route table and routing context operations.
pub type RouteResult<T> = Result<T, RouteError>;

/// Errors raised while building or querying a route table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A route declares a path but no name.
    #[error("Route with path \"{path}\" must have a name")]
    Config { path: String },

    /// No route is registered under the requested name.
    #[error("Undefined route \"{0}\"")]
    NotFound(String),

    /// A required path parameter was not supplied.
    #[error("Missing required parameter \"{param}\"")]
    MissingParam { param: String },

    /// The route exists but has no path to build.
    #[error("Route \"{0}\" has no path")]
    MissingPath(String),

    /// The path template could not be compiled.
    #[error("Invalid path pattern \"{path}\": {reason}")]
    InvalidPattern { path: String, reason: String },
}

impl RouteError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub(crate) fn invalid_pattern(path: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors from loading options or route tables from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to read the file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid TOML document.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
