//! Ordering an unordered bag of edges into a boundary loop.

use nalgebra::Point;

use crate::error::{GeometryError, GeometryResult};

/// Relative tolerance for endpoint matching, applied per component.
const MATCH_RTOL: f64 = 1e-9;

/// Order an unordered collection of directed edges into a closed loop.
///
/// Seeds the loop with both endpoints of the first edge, then repeatedly
/// scans the unconsumed edges, appending the end point of any edge whose
/// start point matches the last placed point. For a well-formed boundary
/// the final point repeats the first.
///
/// Matching follows edge direction only: all edges must wind the same way
/// around the loop (either way around works, but not a mixture). Endpoints
/// match under a relative tolerance of 1e-9 per component with no absolute
/// term, so a coordinate that is exactly zero only matches another exact
/// zero.
///
/// Runs in O(n²) time in the number of edges. Chain once and reuse the
/// result rather than re-chaining in a hot path.
///
/// Works for any point dimension; faces chain 3D edges and flattened
/// polygons chain 2D edges.
///
/// # Errors
///
/// Returns [`GeometryError::DisconnectedChain`] if a full scan consumes no
/// edge while some remain: the input was disconnected, wound inconsistently,
/// or contained more than one loop.
///
/// # Example
///
/// ```
/// use facet_types::{chain_edges, Point3};
///
/// let a = Point3::new(0.0, 0.0, 0.0);
/// let b = Point3::new(1.0, 0.0, 0.0);
/// let c = Point3::new(0.0, 1.0, 0.0);
///
/// // Out of order, but all wound the same way: b→c, a→b, c→a
/// let chained = chain_edges(&[[b, c], [a, b], [c, a]]).unwrap();
/// assert_eq!(chained, vec![b, c, a, b]);
/// ```
pub fn chain_edges<const D: usize>(
    edges: &[[Point<f64, D>; 2]],
) -> GeometryResult<Vec<Point<f64, D>>> {
    let Some(first) = edges.first() else {
        return Ok(Vec::new());
    };

    let mut points = Vec::with_capacity(edges.len() + 1);
    points.push(first[0]);
    points.push(first[1]);
    let mut last = first[1];

    let mut consumed = vec![false; edges.len()];
    consumed[0] = true;
    let mut remaining = edges.len() - 1;

    while remaining > 0 {
        let mut progressed = false;
        for (i, edge) in edges.iter().enumerate() {
            if consumed[i] {
                continue;
            }
            if points_match(&edge[0], &last) {
                points.push(edge[1]);
                last = edge[1];
                consumed[i] = true;
                remaining -= 1;
                progressed = true;
            }
        }
        if !progressed {
            return Err(GeometryError::DisconnectedChain { remaining });
        }
    }

    Ok(points)
}

/// Per-component relative comparison: `|a - b| <= rtol * |b|`.
///
/// The reference point is the second argument; there is no absolute
/// tolerance term.
fn points_match<const D: usize>(candidate: &Point<f64, D>, reference: &Point<f64, D>) -> bool {
    candidate
        .iter()
        .zip(reference.iter())
        .all(|(a, b)| (a - b).abs() <= MATCH_RTOL * b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Point3};

    fn square_edges() -> Vec<[Point3<f64>; 2]> {
        let p = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        vec![[p[0], p[1]], [p[1], p[2]], [p[2], p[3]], [p[3], p[0]]]
    }

    #[test]
    fn empty_input_yields_empty_loop() {
        let edges: Vec<[Point3<f64>; 2]> = Vec::new();
        let points = chain_edges(&edges);
        assert!(points.is_ok());
        assert!(points.unwrap_or_default().is_empty());
    }

    #[test]
    fn in_order_square_closes() {
        let edges = square_edges();
        let points = chain_edges(&edges).unwrap_or_default();

        assert_eq!(points.len(), 5);
        assert_eq!(points[0], points[4]);
        assert_eq!(points[1], Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn shuffled_square_closes() {
        let edges = square_edges();
        let shuffled = vec![edges[2], edges[0], edges[3], edges[1]];
        let points = chain_edges(&shuffled).unwrap_or_default();

        // Starts at the first given edge, visits all corners, closes
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Point3::new(1.0, 1.0, 0.0));
        assert_eq!(points[0], points[4]);
    }

    #[test]
    fn out_of_order_triangle() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);

        let points = chain_edges(&[[b, c], [a, b], [c, a]]).unwrap_or_default();
        assert_eq!(points, vec![b, c, a, b]);
    }

    #[test]
    fn reverse_winding_also_chains() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);

        // Same loop traversed the other way around
        let points = chain_edges(&[[c, b], [b, a], [a, c]]).unwrap_or_default();
        assert_eq!(points, vec![c, b, a, c]);
    }

    #[test]
    fn mixed_winding_stalls() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);

        // Second edge reversed: its start point c is never reachable
        let result = chain_edges(&[[a, b], [c, b], [c, a]]);
        assert!(matches!(
            result,
            Err(GeometryError::DisconnectedChain { remaining: 2 })
        ));
    }

    #[test]
    fn two_disjoint_loops_stall() {
        let edges = vec![
            [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            [Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
            [Point3::new(0.0, 1.0, 0.0), Point3::new(0.0, 0.0, 0.0)],
            [Point3::new(5.0, 5.0, 5.0), Point3::new(6.0, 5.0, 5.0)],
            [Point3::new(6.0, 5.0, 5.0), Point3::new(5.0, 6.0, 5.0)],
            [Point3::new(5.0, 6.0, 5.0), Point3::new(5.0, 5.0, 5.0)],
        ];

        let result = chain_edges(&edges);
        assert!(matches!(
            result,
            Err(GeometryError::DisconnectedChain { remaining: 3 })
        ));
    }

    #[test]
    fn tolerance_accepts_tiny_relative_error() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let b_near = Point3::new(1.0 + 5e-10, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);

        let points = chain_edges(&[[a, b], [b_near, c], [c, a]]).unwrap_or_default();
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn tolerance_rejects_large_relative_error() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let b_far = Point3::new(1.0 + 5e-6, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);

        let result = chain_edges(&[[a, b], [b_far, c], [c, a]]);
        assert!(result.is_err());
    }

    #[test]
    fn zero_component_requires_exact_zero() {
        // No absolute tolerance: 1e-15 does not match a reference of 0.0
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let b_off_zero = Point3::new(1.0, 1e-15, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);

        let result = chain_edges(&[[a, b], [b_off_zero, c], [c, a]]);
        assert!(result.is_err());
    }

    #[test]
    fn chains_two_dimensional_edges() {
        let p = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];
        let points = chain_edges(&[[p[1], p[2]], [p[0], p[1]], [p[2], p[0]]]).unwrap_or_default();
        assert_eq!(points, vec![p[1], p[2], p[0], p[1]]);
    }
}
