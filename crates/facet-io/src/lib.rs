//! STL import for facet.
//!
//! This crate loads triangle soup from STL files, in binary or ASCII
//! form, and hands it to the geometric core:
//!
//! - [`load_stl`] - Raw `RawTriangle` records, format autodetected
//! - [`load_model`] - The same records assembled into a `Model`
//!
//! Stored facet normals are kept verbatim rather than recomputed; the
//! rest of the pipeline treats the supplied normal as authoritative.
//! Only a zero-length stored normal is replaced, by the winding normal,
//! so every record carries a usable direction.
//!
//! # Example
//!
//! ```no_run
//! use facet_io::load_model;
//!
//! let model = load_model("bracket.stl").unwrap();
//! println!("Loaded {} faces", model.face_count());
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
mod stl;

pub use error::{StlError, StlResult};
pub use stl::{load_model, load_stl};
