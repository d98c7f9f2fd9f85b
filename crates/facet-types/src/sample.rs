//! Sample geometry for tests and examples.

use nalgebra::{Point3, Vector3};

use crate::face::Face;
use crate::model::Model;

/// Build an axis-aligned cube of triangular faces.
///
/// The cube has `origin` as its minimum corner and extends `size` along
/// each axis: 12 triangles, two per side, CCW winding when viewed from
/// outside. Every triangle carries an exact axis-aligned unit normal, the
/// way a well-behaved surface file would supply them.
///
/// # Example
///
/// ```
/// use facet_types::{sample, Point3};
///
/// let cube = sample::cube(Point3::new(0.0, 0.0, 0.0), 35.0);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn cube(origin: Point3<f64>, size: f64) -> Model {
    let (x, y, z) = (origin.x, origin.y, origin.z);
    let s = size;

    // 8 corners of the cube
    let v = [
        Point3::new(x, y, z),         // 0
        Point3::new(x + s, y, z),     // 1
        Point3::new(x + s, y + s, z), // 2
        Point3::new(x, y + s, z),     // 3
        Point3::new(x, y, z + s),     // 4
        Point3::new(x + s, y, z + s), // 5
        Point3::new(x + s, y + s, z + s), // 6
        Point3::new(x, y + s, z + s), // 7
    ];

    let sides: [([usize; 3], [usize; 3], Vector3<f64>); 6] = [
        // Bottom (z = min) - normal points -Z
        ([0, 2, 1], [0, 3, 2], Vector3::new(0.0, 0.0, -1.0)),
        // Top (z = max) - normal points +Z
        ([4, 5, 6], [4, 6, 7], Vector3::new(0.0, 0.0, 1.0)),
        // Front (y = min) - normal points -Y
        ([0, 1, 5], [0, 5, 4], Vector3::new(0.0, -1.0, 0.0)),
        // Back (y = max) - normal points +Y
        ([3, 7, 6], [3, 6, 2], Vector3::new(0.0, 1.0, 0.0)),
        // Left (x = min) - normal points -X
        ([0, 4, 7], [0, 7, 3], Vector3::new(-1.0, 0.0, 0.0)),
        // Right (x = max) - normal points +X
        ([1, 2, 6], [1, 6, 5], Vector3::new(1.0, 0.0, 0.0)),
    ];

    let mut model = Model::new();
    for (first, second, normal) in sides {
        model.add_face(Face::triangle(v[first[0]], v[first[1]], v[first[2]], Some(normal)));
        model.add_face(Face::triangle(v[second[0]], v[second[1]], v[second[2]], Some(normal)));
    }
    model
}

/// Build the unit cube: corner at the origin, side length 1.
#[must_use]
pub fn unit_cube() -> Model {
    cube(Point3::new(0.0, 0.0, 0.0), 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_twelve_triangles() {
        let model = unit_cube();
        assert_eq!(model.face_count(), 12);
        assert!(model.iter().all(|f| f.edges.len() == 3));
    }

    #[test]
    fn cube_normals_are_unit_axes() {
        let axes = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
        ];

        let model = unit_cube();
        for face in &model {
            assert!(axes.contains(&face.normal), "unexpected normal {:?}", face.normal);
        }
    }

    #[test]
    fn cube_sides_pair_up_by_shared_edge() {
        let model = unit_cube();
        // Triangles come in side pairs: (0,1), (2,3), ...
        for pair in model.faces.chunks(2) {
            assert!(pair[0].adjacent_to(&pair[1]));
            assert_eq!(pair[0].normal, pair[1].normal);
        }
    }

    #[test]
    fn cube_respects_origin_and_size() {
        let model = cube(Point3::new(1.0, 2.0, 3.0), 35.0);
        for face in &model {
            for edge in &face.edges {
                for p in [edge.start, edge.end] {
                    assert!((1.0..=36.0).contains(&p.x));
                    assert!((2.0..=37.0).contains(&p.y));
                    assert!((3.0..=38.0).contains(&p.z));
                }
            }
        }
    }
}
