//! Core geometric types for facet.
//!
//! This crate provides the foundational types for coplanar-face reduction
//! and flat-pattern projection:
//!
//! - [`Edge`] - A directed edge with undirected equality
//! - [`Face`] - A planar face bounded by a loop of edges
//! - [`Model`] - An ordered collection of faces
//! - [`RawTriangle`] - Loader-to-model interchange record
//! - [`chain_edges`] - Orders an unordered bag of edges into a loop
//!
//! Faces keep whatever normal their source supplied; nothing in this crate
//! recomputes a normal that was given. Edge and point comparison is exact
//! except during chaining, which matches endpoints to a relative 1e-9.
//!
//! # Coordinate System
//!
//! All coordinates are `f64` in a **right-handed coordinate system**.
//! Face winding is **counter-clockwise when viewed from outside**, with
//! normals pointing outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use facet_types::{sample, Point3, Vector3};
//!
//! let cube = sample::cube(Point3::new(0.0, 0.0, 0.0), 35.0);
//! assert_eq!(cube.face_count(), 12);
//!
//! // Every triangle carries the normal its builder supplied
//! let bottom = &cube.faces[0];
//! assert_eq!(bottom.unit_normal().unwrap(), Vector3::new(0.0, 0.0, -1.0));
//! ```
//!
//! # Quality Standards
//!
//! This crate maintains A-grade standards per [STANDARDS.md](../../../STANDARDS.md):
//! - ≥90% test coverage
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod chain;
mod edge;
mod error;
mod face;
mod model;
pub mod sample;

// Re-export core types
pub use chain::chain_edges;
pub use edge::Edge;
pub use error::{GeometryError, GeometryResult};
pub use face::Face;
pub use model::{Model, RawTriangle};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};
