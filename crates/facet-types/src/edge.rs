//! Directed edge between two points.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

/// A directed edge between two points in 3D space.
///
/// Direction matters when chaining a boundary (loops follow start → end),
/// but equality is undirected: edges joining the same pair of points
/// compare equal whichever way they run. Endpoint comparison is exact,
/// component by component.
///
/// # Example
///
/// ```
/// use facet_types::{Edge, Point3};
///
/// let e = Edge::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
/// assert_eq!(e, e.reversed());
/// assert_eq!(e.vector(), nalgebra::Vector3::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Start point.
    pub start: Point3<f64>,
    /// End point.
    pub end: Point3<f64>,
}

impl Edge {
    /// Create an edge from start to end.
    #[inline]
    #[must_use]
    pub const fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Create an edge from a slice of points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidEdge`] unless exactly two points
    /// are given.
    pub fn try_from_points(points: &[Point3<f64>]) -> GeometryResult<Self> {
        match points {
            [start, end] => Ok(Self::new(*start, *end)),
            _ => Err(GeometryError::InvalidEdge { got: points.len() }),
        }
    }

    /// The vector from start to end.
    #[inline]
    #[must_use]
    pub fn vector(&self) -> Vector3<f64> {
        self.end - self.start
    }

    /// This edge with start and end swapped.
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Both endpoints as a start/end pair.
    #[inline]
    #[must_use]
    pub const fn endpoints(&self) -> [Point3<f64>; 2] {
        [self.start, self.end]
    }
}

impl PartialEq for Edge {
    /// Undirected comparison: (a, b) equals (b, a).
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}
