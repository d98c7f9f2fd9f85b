//! Property-based tests for flat-pattern projection.
//!
//! These tests build regular polygons in arbitrarily rotated planes and
//! verify that flattening is an isometry: lengths, closure, and area all
//! survive the trip into 2D.
//!
//! Run with: cargo test -p facet-flatten -- proptest

use facet_flatten::flatten_face;
use facet_types::{Edge, Face, Point2, Point3, Vector3};
use nalgebra::Rotation3;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generate a regular n-gon face lying in a randomly rotated and translated
/// plane, with the plane normal stored on the face.
fn arb_rotated_polygon_face() -> impl Strategy<Value = Face> {
    (
        3usize..=12,
        1.0..40.0f64,
        -3.0..3.0f64,
        -3.0..3.0f64,
        -3.0..3.0f64,
        prop::array::uniform3(-100.0..100.0f64),
    )
        .prop_map(|(n, radius, roll, pitch, yaw, shift)| {
            let rotation = Rotation3::from_euler_angles(roll, pitch, yaw);
            let shift = Vector3::new(shift[0], shift[1], shift[2]);

            let corners: Vec<Point3<f64>> = (0..n)
                .map(|k| {
                    let theta = std::f64::consts::TAU * (k as f64) / (n as f64);
                    let local = Point3::new(radius * theta.cos(), radius * theta.sin(), 0.0);
                    rotation * local + shift
                })
                .collect();

            let edges = (0..n)
                .map(|k| Edge::new(corners[k], corners[(k + 1) % n]))
                .collect();
            Face::new(edges, rotation * Vector3::z())
        })
}

/// Signed shoelace area of an open corner loop.
fn shoelace_area(corners: &[Point2<f64>]) -> f64 {
    let n = corners.len();
    let mut doubled = 0.0;
    for k in 0..n {
        let a = corners[k];
        let b = corners[(k + 1) % n];
        doubled += a.x * b.y - b.x * a.y;
    }
    doubled / 2.0
}

// =============================================================================
// Property Tests: Flattening is an isometry
// =============================================================================

proptest! {
    /// Every flattened edge has the same length as its 3D source.
    #[test]
    fn flattening_preserves_edge_lengths(face in arb_rotated_polygon_face()) {
        let polygon = flatten_face(&face).unwrap_or_default();
        prop_assert_eq!(polygon.edge_count(), face.edge_count());

        for (source, flat) in face.edges.iter().zip(polygon.edges.iter()) {
            let length_3d = source.vector().norm();
            let length_2d = (flat[1] - flat[0]).norm();
            prop_assert!((length_3d - length_2d).abs() <= 1e-9 * length_3d);
        }
    }

    /// The flattened outline still chains into one closed loop.
    #[test]
    fn flattened_outline_chains_closed(face in arb_rotated_polygon_face()) {
        let polygon = flatten_face(&face).unwrap_or_default();
        let points = polygon.points();
        prop_assert!(points.is_ok());

        let points = points.unwrap_or_default();
        prop_assert_eq!(points.len(), face.edge_count() + 1);
        prop_assert_eq!(points.first(), points.last());
    }

    /// The first edge is pinned to the +X axis: start at the origin, end
    /// at (length, 0).
    #[test]
    fn first_edge_lands_on_x_axis(face in arb_rotated_polygon_face()) {
        let polygon = flatten_face(&face).unwrap_or_default();
        let [start, end] = polygon.edges[0];
        let length = face.edges[0].vector().norm();

        prop_assert_eq!(start, Point2::new(0.0, 0.0));
        prop_assert!((end.x - length).abs() <= 1e-9 * length);
        prop_assert!(end.y.abs() <= 1e-9 * length);
    }

    /// Enclosed area matches the analytic regular-polygon area, and the
    /// winding stays counter-clockwise (positive shoelace sum).
    #[test]
    fn flattening_preserves_area_and_winding(face in arb_rotated_polygon_face()) {
        let n = face.edge_count();
        let radius = {
            // Recover the circumradius from the first corner's distance to
            // the centroid of all corners.
            let corners = face.corner_points().unwrap_or_default();
            let centroid = corners
                .iter()
                .fold(Vector3::zeros(), |acc, p| acc + p.coords)
                / corners.len() as f64;
            (corners[0].coords - centroid).norm()
        };
        let expected = 0.5 * (n as f64) * radius * radius * (std::f64::consts::TAU / n as f64).sin();

        let polygon = flatten_face(&face).unwrap_or_default();
        let corners = polygon.corner_points().unwrap_or_default();
        let area = shoelace_area(&corners);

        prop_assert!(area > 0.0);
        prop_assert!((area - expected).abs() <= 1e-6 * expected);
    }
}

// =============================================================================
// Fixed regression cases
// =============================================================================

#[test]
fn cube_triangles_flatten_to_right_triangles() {
    let cube = facet_types::sample::unit_cube();

    for face in &cube {
        let polygon = flatten_face(face).unwrap_or_default();
        let mut lengths: Vec<f64> = polygon
            .edges
            .iter()
            .map(|[a, b]| (b - a).norm())
            .collect();
        lengths.sort_by(f64::total_cmp);

        // Each cube side splits into right isoceles triangles: legs 1, 1
        // and hypotenuse sqrt(2).
        assert!((lengths[0] - 1.0).abs() < 1e-12);
        assert!((lengths[1] - 1.0).abs() < 1e-12);
        assert!((lengths[2] - std::f64::consts::SQRT_2).abs() < 1e-12);
    }
}
