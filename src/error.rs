//! Error types for settings loading and page shell rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading settings or rendering the page shell.
///
/// Absent optional settings never produce an error; they only remove the
/// element that depends on them.
#[derive(Error, Debug)]
pub enum ShellError {
    /// A required settings field is missing or blank.
    #[error("Required setting `{field}` is missing or empty")]
    MissingField { field: &'static str },

    /// A navigation entry cannot be rendered.
    #[error("Invalid navigation item at position {index}: {reason}")]
    InvalidNavigation { index: usize, reason: &'static str },

    /// Settings document is not valid JSON or has the wrong shape.
    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Settings file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ShellError {
    /// Create a missing field error.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
