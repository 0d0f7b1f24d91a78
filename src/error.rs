//! Error types for todotxt.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Every failure the todotxt library and binary can surface.
#[derive(Debug, Error)]
pub enum TodoTxtError {
    /// A line failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Configuration could not be located, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
