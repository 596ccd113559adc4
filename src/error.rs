//! Error types with actionable diagnostics.
//!
//! The schedule and meter arithmetic never fails; these errors come from
//! configuration loading, validation, checked meter updates and the CLI.

use crate::config::ValidationError;
use thiserror::Error;

/// Result type alias for ritmo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ritmo.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration parsed but holds invalid values.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Input line could not be parsed as a number.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Meter observation weight must be positive.
    #[error("Invalid observation weight: {0} (must be > 0)")]
    InvalidWeight(u64),

    /// Output serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) | Self::InvalidWeight(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
