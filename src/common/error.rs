//! Error types for the verification harness
//!
//! Messages are shown to the operator as-is, so they say what went wrong
//! and, where possible, how to fix it.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the verification harness
#[derive(Error, Debug)]
pub enum Error {
    // === Run Control ===
    /// The operator interrupted the run (Ctrl-C or closed input).
    ///
    /// Not a failure: the runner stops and reports what it has.
    #[error("Run cancelled by operator")]
    Cancelled,

    // === Check Errors ===
    #[error("Check '{name}' failed unexpectedly: {reason}")]
    CheckFailed { name: String, reason: String },

    #[error("Unknown check '{name}'. Available checks: {available}")]
    UnknownCheck { name: String, available: String },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    #[error("Failed to write file '{path}': {error}")]
    FileWrite { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown check error listing the valid names
    pub fn unknown_check<S: AsRef<str>>(name: &str, available: &[S]) -> Self {
        Self::UnknownCheck {
            name: name.to_string(),
            available: available
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Create a check failure error
    pub fn check_failed(name: &str, reason: &str) -> Self {
        Self::CheckFailed {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error is the operator's cancellation signal
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_check_lists_available() {
        let err = Error::unknown_check("Nope", &["Model Search", "Spaces Search"]);
        assert_eq!(
            err.to_string(),
            "Unknown check 'Nope'. Available checks: Model Search, Spaces Search"
        );
    }

    #[test]
    fn test_only_cancelled_is_cancelled() {
        assert!(Error::Cancelled.is_cancelled());
        assert!(!Error::ConfigParse("x".into()).is_cancelled());
    }
}
