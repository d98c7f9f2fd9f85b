//! Planar face bounded by a loop of edges.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::chain::chain_edges;
use crate::edge::Edge;
use crate::error::{GeometryError, GeometryResult};

/// A planar face bounded by a loop of edges.
///
/// Edges may be stored in any order; [`Face::boundary_points`] chains them
/// into visiting order on demand. The stored normal is carried verbatim and
/// is not necessarily unit length.
///
/// # Example
///
/// ```
/// use facet_types::{Face, Point3, Vector3};
///
/// let face = Face::triangle(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     None,
/// );
///
/// assert_eq!(face.edges.len(), 3);
/// assert_eq!(face.unit_normal().unwrap(), Vector3::new(0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Boundary edges, in no particular order.
    pub edges: Vec<Edge>,
    /// Face normal as supplied or derived. Not necessarily unit length.
    pub normal: Vector3<f64>,
}

impl Face {
    /// Create a face from edges and an explicit normal.
    ///
    /// The normal is stored verbatim; it is never recomputed from the
    /// edges once supplied.
    #[must_use]
    pub const fn new(edges: Vec<Edge>, normal: Vector3<f64>) -> Self {
        Self { edges, normal }
    }

    /// Create a face, deriving its normal from the boundary.
    ///
    /// The normal is the cross product of the first edge's vector with the
    /// reversed last edge's vector, which assumes the last edge closes the
    /// loop back to the first edge's start.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateFace`] if `edges` is empty.
    pub fn from_edges(edges: Vec<Edge>) -> GeometryResult<Self> {
        let normal = match (edges.first(), edges.last()) {
            (Some(first), Some(last)) => first.vector().cross(&last.reversed().vector()),
            _ => return Err(GeometryError::DegenerateFace),
        };
        Ok(Self { edges, normal })
    }

    /// Create a triangular face from three corner points.
    ///
    /// Builds the directed edges a→b, b→c, c→a. When `normal` is `None` it
    /// is derived from the winding by the right-hand rule.
    #[must_use]
    pub fn triangle(
        a: Point3<f64>,
        b: Point3<f64>,
        c: Point3<f64>,
        normal: Option<Vector3<f64>>,
    ) -> Self {
        let edges = vec![Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)];
        let normal = normal.unwrap_or_else(|| (b - a).cross(&(c - a)));
        Self { edges, normal }
    }

    /// The unit-length face normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateFace`] if the stored normal has
    /// zero length.
    pub fn unit_normal(&self) -> GeometryResult<Vector3<f64>> {
        let len_sq = self.normal.norm_squared();
        if len_sq > f64::EPSILON {
            Ok(self.normal / len_sq.sqrt())
        } else {
            Err(GeometryError::DegenerateFace)
        }
    }

    /// The mean of the boundary edges' start points.
    ///
    /// In a chained boundary every corner starts exactly one edge, so this
    /// is the centroid of the corners. A face with no edges yields the
    /// origin.
    #[must_use]
    pub fn midpoint(&self) -> Point3<f64> {
        let mut sum = Vector3::zeros();
        for edge in &self.edges {
            sum += edge.start.coords;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.edges.len().max(1) as f64;
        Point3::from(sum / count)
    }

    /// The three corner points, if this face is a triangle.
    ///
    /// Corners are the start points of the three edges in stored order.
    #[must_use]
    pub fn triangle_vertices(&self) -> Option<[Point3<f64>; 3]> {
        match self.edges.as_slice() {
            [e0, e1, e2] => Some([e0.start, e1.start, e2.start]),
            _ => None,
        }
    }

    /// Whether any boundary edge equals `edge` (undirected comparison).
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.iter().any(|e| e == edge)
    }

    /// Whether this face shares at least one edge with `other`.
    #[must_use]
    pub fn adjacent_to(&self, other: &Self) -> bool {
        self.edges.iter().any(|e| other.contains_edge(e))
    }

    /// Number of boundary edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The ordered boundary loop of this face.
    ///
    /// Chains the stored edges into visiting order. The loop is closed:
    /// the final point repeats the first. Chaining is O(n²) in the edge
    /// count, so call once and reuse.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DisconnectedChain`] if the edges do not
    /// form a single loop with consistent winding. A face fused out of a
    /// ring of neighbors (a boundary with a hole) surfaces here.
    pub fn boundary_points(&self) -> GeometryResult<Vec<Point3<f64>>> {
        let segments: Vec<[Point3<f64>; 2]> = self.edges.iter().map(Edge::endpoints).collect();
        chain_edges(&segments)
    }

    /// The ordered corner points of this face.
    ///
    /// Like [`Face::boundary_points`] with the repeated closing point
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DisconnectedChain`] if the edges do not
    /// form a single loop with consistent winding.
    pub fn corner_points(&self) -> GeometryResult<Vec<Point3<f64>>> {
        let mut points = self.boundary_points()?;
        points.pop();
        Ok(points)
    }
}

impl PartialEq for Face {
    /// Faces are equal when their normals are exactly equal and their edge
    /// sequences match position by position, each edge compared without
    /// regard to direction.
    ///
    /// Two faces listing the same edges in different orders compare
    /// unequal.
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && self.edges == other.edges
    }
}
