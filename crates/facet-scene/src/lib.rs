//! Scene management for facet.
//!
//! A scene is a named, ordered collection of placed models:
//!
//! - [`ModelPlacement`] - One model with a reference name, world
//!   location, and optional selected face
//! - [`Scene`] - The insertion-ordered container, with whole-scene
//!   reduction
//!
//! References are unique; adding a second placement under an existing
//! reference is an error rather than a silent overwrite. Iteration
//! always follows insertion order, so repeated display or export passes
//! walk the placements in the same sequence.
//!
//! # Example
//!
//! ```
//! use facet_reduce::ReduceParams;
//! use facet_scene::Scene;
//! use facet_types::{sample, Vector3};
//!
//! let mut scene = Scene::new();
//! scene
//!     .add_model("cube", sample::unit_cube(), Vector3::zeros())
//!     .unwrap();
//! scene.reduce_all(&ReduceParams::default()).unwrap();
//!
//! assert_eq!(scene.get_model("cube").unwrap().face_count(), 6);
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

mod error;
mod placement;
mod scene;

pub use error::{SceneError, SceneResult};
pub use placement::ModelPlacement;
pub use scene::Scene;
