//! Model: an ordered collection of faces.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::face::Face;

/// A triangle as read from a surface file: three vertices plus the normal
/// that came with them.
///
/// This is the interchange form between file loaders and [`Model`]. The
/// normal is carried through verbatim; nothing downstream recomputes a
/// supplied normal from the vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawTriangle {
    /// Corner positions, in winding order.
    pub vertices: [[f64; 3]; 3],
    /// Normal as supplied by the source. Not validated or normalized.
    pub normal: [f64; 3],
}

impl RawTriangle {
    /// Create a raw triangle from vertex and normal arrays.
    #[inline]
    #[must_use]
    pub const fn new(vertices: [[f64; 3]; 3], normal: [f64; 3]) -> Self {
        Self { vertices, normal }
    }
}

/// An ordered collection of faces.
///
/// Iteration order is insertion order, and operations that rebuild a model
/// keep a deterministic order so repeated runs produce identical output.
/// A `Model` is never mutated in place by reduction; reduction returns a
/// new `Model` that the caller assigns explicitly.
///
/// # Example
///
/// ```
/// use facet_types::{Model, RawTriangle};
///
/// let tri = RawTriangle::new(
///     [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
///     [0.0, 0.0, 1.0],
/// );
/// let model = Model::from_triangles(&[tri]);
///
/// assert_eq!(model.face_count(), 1);
/// assert_eq!(model.faces[0].edges.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Model {
    /// Faces in insertion order.
    pub faces: Vec<Face>,
}

impl Model {
    /// Create an empty model.
    #[must_use]
    pub const fn new() -> Self {
        Self { faces: Vec::new() }
    }

    /// Build a model of triangular faces from raw triangle records.
    ///
    /// Each record becomes a three-edge face with directed edges v0→v1,
    /// v1→v2, v2→v0 and the record's normal stored verbatim.
    #[must_use]
    pub fn from_triangles(triangles: &[RawTriangle]) -> Self {
        let faces = triangles
            .iter()
            .map(|tri| {
                let [a, b, c] = tri.vertices.map(|v| Point3::new(v[0], v[1], v[2]));
                let normal = Vector3::new(tri.normal[0], tri.normal[1], tri.normal[2]);
                Face::triangle(a, b, c, Some(normal))
            })
            .collect();
        Self { faces }
    }

    /// Append a face.
    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the model has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Iterate over the faces in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Face> {
        self.faces.iter()
    }
}

impl<'a> IntoIterator for &'a Model {
    type Item = &'a Face;
    type IntoIter = std::slice::Iter<'a, Face>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn from_triangles_builds_directed_edges() {
        let tri = RawTriangle::new(
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            [0.0, 0.0, 1.0],
        );
        let model = Model::from_triangles(&[tri]);

        assert_eq!(model.face_count(), 1);
        let face = &model.faces[0];
        assert_eq!(face.edges.len(), 3);
        assert_eq!(face.edges[0].start, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(face.edges[0].end, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(face.edges[2].end, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn from_triangles_keeps_supplied_normal() {
        // Deliberately inconsistent with the winding: must survive as-is
        let tri = RawTriangle::new(
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            [0.0, 0.0, -2.5],
        );
        let model = Model::from_triangles(&[tri]);

        assert_eq!(model.faces[0].normal, Vector3::new(0.0, 0.0, -2.5));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut model = Model::new();
        assert!(model.is_empty());

        for i in 0..4 {
            let x = f64::from(i);
            model.add_face(Face::triangle(
                Point3::new(x, 0.0, 0.0),
                Point3::new(x + 1.0, 0.0, 0.0),
                Point3::new(x, 1.0, 0.0),
                None,
            ));
        }

        assert_eq!(model.face_count(), 4);
        let mut expected_x = 0.0;
        for face in &model {
            assert_eq!(face.edges[0].start, Point3::new(expected_x, 0.0, 0.0));
            expected_x += 1.0;
        }
    }
}
