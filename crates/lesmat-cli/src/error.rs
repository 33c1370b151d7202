//! Error types for lesmat-cli

use thiserror::Error;

/// Result type alias for lesmat-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lesmat-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from lesmat-core (catalog loading, configuration)
    #[error(transparent)]
    Core(#[from] lesmat_core::Error),

    /// Writing output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command-line argument was unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
