//! Reporting of duplicate route names found while flattening.

use std::cell::RefCell;
use std::fmt;

/// Placeholder shown for a route that has no path.
pub const NO_PATH: &str = "<no path>";

/// Two routes registered under the same name. The first one is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRoute {
    /// The conflicting name.
    pub name: String,
    /// Path of the definition that was kept.
    pub kept_path: Option<String>,
    /// Path of the definition that was ignored.
    pub ignored_path: Option<String>,
}

impl fmt::Display for DuplicateRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duplicate route \"{}\": \"{}\" and \"{}\"",
            self.name,
            self.kept_path.as_deref().unwrap_or(NO_PATH),
            self.ignored_path.as_deref().unwrap_or(NO_PATH),
        )
    }
}

/// Sink for duplicate route warnings.
pub trait DuplicateReporter {
    /// Called once per ignored duplicate, in traversal order.
    fn report(&self, duplicate: &DuplicateRoute);
}

/// Emits duplicates as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl DuplicateReporter for TracingReporter {
    fn report(&self, duplicate: &DuplicateRoute) {
        tracing::warn!(
            route = %duplicate.name,
            kept = duplicate.kept_path.as_deref().unwrap_or(NO_PATH),
            ignored = duplicate.ignored_path.as_deref().unwrap_or(NO_PATH),
            "{}",
            duplicate
        );
    }
}

/// Discards duplicate warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl DuplicateReporter for NoopReporter {
    fn report(&self, _duplicate: &DuplicateRoute) {}
}

/// Keeps every reported duplicate for later inspection.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    duplicates: RefCell<Vec<DuplicateRoute>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicates reported so far.
    pub fn duplicates(&self) -> Vec<DuplicateRoute> {
        self.duplicates.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.duplicates.borrow().is_empty()
    }
}

impl DuplicateReporter for CollectingReporter {
    fn report(&self, duplicate: &DuplicateRoute) {
        self.duplicates.borrow_mut().push(duplicate.clone());
    }
}
