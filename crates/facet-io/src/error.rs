//! Error types for STL import.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for STL import operations.
pub type StlResult<T> = Result<T, StlError>;

/// Errors that can occur while loading STL files.
#[derive(Debug, Error)]
pub enum StlError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// The file ended before the declared triangle count was read.
    #[error("triangle count mismatch: header declares {expected}, file holds {got}")]
    TriangleCountMismatch {
        /// Number of triangles declared in the header.
        expected: u32,
        /// Number of complete triangles actually read.
        got: u32,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl StlError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
