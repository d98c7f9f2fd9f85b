//! Coplanar face reduction and flat-pattern projection for triangulated models.
//!
//! This umbrella crate re-exports all facet-* crates, providing a unified
//! API for the whole pipeline: load a triangulated model, fuse coplanar
//! adjacent triangles back into minimal polygons, then project each
//! polygon into its own plane (for pattern export) or onto a viewing
//! surface (for display).
//!
//! # Quick Start
//!
//! ```
//! use facet::prelude::*;
//!
//! // Build a model (or load one with `facet::io::load_model`)
//! let cube = facet::types::sample::unit_cube();
//!
//! // Fuse coplanar triangles into minimal polygons
//! let reduced = reduce_model(&cube, &ReduceParams::default()).unwrap();
//! assert_eq!(reduced.face_count(), 6);
//!
//! // Flatten every face into 2D and emit an SVG pattern
//! let svg = export_model_svg(&reduced, &SvgExportParams::default()).unwrap();
//! assert!(svg.contains("<polygon"));
//!
//! // Project corners onto an 800x600 canvas for display
//! let viewport = Viewport::new((800, 600));
//! let corners = reduced.faces[0].corner_points().unwrap();
//! assert_eq!(viewport.project_points(&corners).len(), 4);
//! ```
//!
//! # Module Organization
//!
//! ## Foundation
//! - [`types`] - Core data structures: `Edge`, `Face`, `Model`, edge chaining
//! - [`io`] - STL loading (binary and ASCII)
//!
//! ## Core Operations
//! - [`reduce`] - Coplanar face reduction, the system's central algorithm
//! - [`flatten`] - Face-local 2D flattening and SVG pattern export
//!
//! ## Display
//! - [`view`] - Camera state and point projection for on-screen rendering
//! - [`scene`] - Named model placements with whole-scene reduction

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `Edge`, `Face`, `Model`, edge chaining.
pub use facet_types as types;

/// STL loading (binary and ASCII).
pub use facet_io as io;

/// Coplanar face reduction.
pub use facet_reduce as reduce;

/// Face-local 2D flattening and SVG pattern export.
pub use facet_flatten as flatten;

/// Camera state and point projection for on-screen rendering.
pub use facet_view as view;

/// Named model placements with whole-scene reduction.
pub use facet_scene as scene;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for the reduction and projection pipeline.
///
/// This module re-exports the most commonly used types and functions.
///
/// # Usage
///
/// ```
/// use facet::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use facet_types::{Edge, Face, Model, Point2, Point3, RawTriangle, Vector3};

    // I/O
    pub use facet_io::{load_model, load_stl};

    // Reduction (main use case)
    pub use facet_reduce::{ReduceParams, merge_faces, reduce_model};

    // Flattening and export
    pub use facet_flatten::{Polygon2d, SvgExportParams, export_model_svg, flatten_face};

    // Display
    pub use facet_scene::{ModelPlacement, Scene};
    pub use facet_view::{Perspective, Viewport};
}

// =============================================================================
// Tests
// =============================================================================
