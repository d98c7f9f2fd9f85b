//! Error types for geometric operations.

use thiserror::Error;

/// Errors that can occur while constructing or traversing geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Edge construction received the wrong number of points.
    #[error("an edge requires exactly 2 points, got {got}")]
    InvalidEdge {
        /// Number of points supplied.
        got: usize,
    },

    /// A face has a zero-length normal, or no edges to derive one from.
    #[error("face is degenerate: normal has zero length")]
    DegenerateFace,

    /// Edge chaining made a full pass without consuming an edge.
    ///
    /// The input edges do not form a single loop with consistent winding.
    #[error("could not chain all edges into one loop ({remaining} unreachable)")]
    DisconnectedChain {
        /// Number of edges left unconsumed when the chain stalled.
        remaining: usize,
    },
}

/// Result type for geometric operations.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
