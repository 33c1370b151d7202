//! Error types for lesmat-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for lesmat-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lesmat-core and the crates built on it.
///
/// The search engine itself never fails; these variants cover the edges
/// (catalog files, configuration, user input).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without path context
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file
    #[error("I/O error on {}: {source}", path.display())]
    IoWithPath {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Invalid user input
    #[error("Validation error: {message}")]
    Validation {
        /// Field or argument that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// A looked-up item does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of item (e.g. "material")
        kind: &'static str,
        /// Identifier that was looked up
        id: String,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a not-found error.
    pub fn not_found<S: Into<String>>(kind: &'static str, id: S) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }
}
