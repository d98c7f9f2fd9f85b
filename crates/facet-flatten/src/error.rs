//! Error types for flattening operations.

use facet_types::GeometryError;
use thiserror::Error;

/// Errors that can occur while flattening faces.
#[derive(Debug, Error)]
pub enum FlattenError {
    /// The face has no edges to project.
    #[error("cannot flatten a face with no edges")]
    EmptyFace,

    /// A geometric precondition failed.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Result type for flattening operations.
pub type FlattenResult<T> = std::result::Result<T, FlattenError>;
