//! Error types for Kathavanam.

use thiserror::Error;

/// Common error type for Kathavanam.
#[derive(Error, Debug)]
pub enum KathaError {
    /// I/O error.
    ///
    /// Filesystem failures are never recovered locally; they travel up to
    /// the web layer and become a generic failure response.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for Kathavanam operations.
pub type Result<T> = std::result::Result<T, KathaError>;
