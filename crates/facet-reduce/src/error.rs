//! Error types for face reduction operations.

use facet_types::GeometryError;
use thiserror::Error;

/// Errors that can occur during face reduction.
#[derive(Debug, Error)]
pub enum ReduceError {
    /// Two faces were asked to merge but lie in differently oriented planes.
    #[error("cannot merge faces: unit normals differ ({left:?} vs {right:?})")]
    PlaneMismatch {
        /// Unit normal of the first face.
        left: [f64; 3],
        /// Unit normal of the second face.
        right: [f64; 3],
    },

    /// Two faces were asked to merge but share no edge.
    #[error("cannot merge faces: faces share no edge")]
    NotAdjacent,

    /// A geometric precondition failed.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Result type for reduction operations.
pub type ReduceResult<T> = std::result::Result<T, ReduceError>;
