//! Routing options passed to the context factory.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Options controlling how route paths are compiled and matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingOptions {
    /// Match pathnames case-sensitively.
    pub sensitive: bool,
    /// Do not ignore a trailing slash when matching.
    pub strict: bool,
}

impl RoutingOptions {
    /// Default options: case-insensitive, trailing slash ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable case-sensitive matching.
    pub fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    /// Enable or disable strict trailing-slash matching.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load options from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &str) -> Result<Self, LoadError> {
        let content = read_file(path)?;

        if path.ends_with(".json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}

pub(crate) fn read_file(path: &str) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })
}
