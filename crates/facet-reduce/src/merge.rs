//! Pairwise merging of two coplanar adjacent faces.

use facet_types::{Edge, Face};

use crate::error::{ReduceError, ReduceResult};

/// Merge two coplanar adjacent faces into a single face.
///
/// The merged boundary is the symmetric difference of the two edge lists:
/// edges of `a` not present in `b`, followed by edges of `b` not present
/// in `a`, with presence tested undirected. Shared edges cancel. The
/// merged face keeps `a`'s stored normal.
///
/// Coplanarity is gated on exact unit-normal equality. Faces whose unit
/// normals differ by even one bit do not merge here; [`reduce_model`]
/// groups with a quantized comparison instead.
///
/// [`reduce_model`]: crate::reduce_model
///
/// # Errors
///
/// - [`ReduceError::PlaneMismatch`] if the unit normals are not equal.
/// - [`ReduceError::NotAdjacent`] if the faces share no edge.
/// - [`ReduceError::Geometry`] if either face has a zero-length normal.
///
/// # Example
///
/// ```
/// use facet_reduce::merge_faces;
/// use facet_types::{Face, Point3};
///
/// let a = Point3::new(0.0, 0.0, 0.0);
/// let b = Point3::new(1.0, 0.0, 0.0);
/// let c = Point3::new(1.0, 1.0, 0.0);
/// let d = Point3::new(0.0, 1.0, 0.0);
///
/// let lower = Face::triangle(a, b, c, None);
/// let upper = Face::triangle(a, c, d, None);
///
/// let square = merge_faces(&lower, &upper).unwrap();
/// assert_eq!(square.edge_count(), 4);
/// ```
pub fn merge_faces(a: &Face, b: &Face) -> ReduceResult<Face> {
    let unit_a = a.unit_normal()?;
    let unit_b = b.unit_normal()?;
    if unit_a != unit_b {
        return Err(ReduceError::PlaneMismatch {
            left: unit_a.into(),
            right: unit_b.into(),
        });
    }
    if !a.adjacent_to(b) {
        return Err(ReduceError::NotAdjacent);
    }

    let mut edges: Vec<Edge> = a
        .edges
        .iter()
        .filter(|edge| !b.contains_edge(edge))
        .copied()
        .collect();
    edges.extend(b.edges.iter().filter(|edge| !a.contains_edge(edge)).copied());

    Ok(Face::new(edges, a.normal))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use facet_types::{GeometryError, Point3, Vector3};

    fn square_halves() -> (Face, Face) {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(1.0, 1.0, 0.0);
        let d = Point3::new(0.0, 1.0, 0.0);
        (Face::triangle(a, b, c, None), Face::triangle(a, c, d, None))
    }

    #[test]
    fn test_merge_two_triangles_into_square() {
        let (lower, upper) = square_halves();
        let square = merge_faces(&lower, &upper).unwrap();

        assert_eq!(square.edge_count(), 4);
        // The shared diagonal cancels; the boundary chains into one loop.
        let points = square.corner_points().unwrap();
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_merged_face_keeps_first_normal() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(1.0, 1.0, 0.0);
        let d = Point3::new(0.0, 1.0, 0.0);

        // Same unit normal, different magnitudes.
        let lower = Face::triangle(a, b, c, Some(Vector3::new(0.0, 0.0, 2.0)));
        let upper = Face::triangle(a, c, d, Some(Vector3::new(0.0, 0.0, 5.0)));

        let square = merge_faces(&lower, &upper).unwrap();
        assert_eq!(square.normal, Vector3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_merge_preserves_edge_order() {
        let (lower, upper) = square_halves();
        let square = merge_faces(&lower, &upper).unwrap();

        // Edges of `lower` not shared come first, then edges of `upper`.
        assert_eq!(square.edges[0], lower.edges[0]);
        assert_eq!(square.edges[1], lower.edges[1]);
        assert_eq!(square.edges[2], upper.edges[1]);
        assert_eq!(square.edges[3], upper.edges[2]);
    }

    #[test]
    fn test_plane_mismatch_rejected() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let flat = Face::triangle(a, b, Point3::new(1.0, 1.0, 0.0), None);
        let tilted = Face::triangle(a, b, Point3::new(1.0, 0.0, 1.0), None);

        let result = merge_faces(&flat, &tilted);
        assert!(matches!(result, Err(ReduceError::PlaneMismatch { .. })));
    }

    #[test]
    fn test_not_adjacent_rejected() {
        let near = Face::triangle(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            None,
        );
        let far = Face::triangle(
            Point3::new(10.0, 10.0, 0.0),
            Point3::new(11.0, 10.0, 0.0),
            Point3::new(11.0, 11.0, 0.0),
            None,
        );

        let result = merge_faces(&near, &far);
        assert!(matches!(result, Err(ReduceError::NotAdjacent)));
    }

    #[test]
    fn test_degenerate_face_rejected() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        // Collinear corners derive a zero-length normal.
        let line = Face::triangle(a, b, Point3::new(2.0, 0.0, 0.0), None);
        let plane = Face::triangle(a, b, Point3::new(1.0, 1.0, 0.0), None);

        let result = merge_faces(&line, &plane);
        assert!(matches!(
            result,
            Err(ReduceError::Geometry(GeometryError::DegenerateFace))
        ));
    }

    #[test]
    fn test_shared_edge_cancels_regardless_of_direction() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let c = Point3::new(1.0, 1.0, 0.0);
        let d = Point3::new(0.0, 1.0, 0.0);
        let (lower, _) = square_halves();

        // Shared edge stored as a -> c here, c -> a in `lower`.
        let upper = Face::triangle(c, d, a, None);
        let square = merge_faces(&lower, &upper).unwrap();
        assert_eq!(square.edge_count(), 4);
    }
}
