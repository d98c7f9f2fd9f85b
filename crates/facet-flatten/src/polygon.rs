//! Two-dimensional polygons produced by flattening.

use facet_types::{GeometryResult, Point2, chain_edges};

/// A polygon in the plane, stored as an unordered bag of edges.
///
/// Like its 3D counterpart, a `Polygon2d` keeps edges rather than an
/// ordered point list; [`Polygon2d::points`] chains them into a loop on
/// demand. Edges arrive in whatever order the source face stored them.
///
/// # Example
///
/// ```
/// use facet_flatten::Polygon2d;
/// use facet_types::Point2;
///
/// let mut polygon = Polygon2d::new();
/// polygon.add_edge(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
/// polygon.add_edge(Point2::new(4.0, 0.0), Point2::new(4.0, 3.0));
/// polygon.add_edge(Point2::new(4.0, 3.0), Point2::new(0.0, 0.0));
///
/// let points = polygon.points().unwrap();
/// assert_eq!(points.len(), 4);
/// assert_eq!(points.first(), points.last());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon2d {
    /// Edges as start/end point pairs, in insertion order.
    pub edges: Vec<[Point2<f64>; 2]>,
}

impl Polygon2d {
    /// Create an empty polygon.
    #[must_use]
    pub const fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Append an edge.
    pub fn add_edge(&mut self, start: Point2<f64>, end: Point2<f64>) {
        self.edges.push([start, end]);
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the polygon has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The boundary as a closed point loop: the first point is repeated
    /// at the end.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DisconnectedChain`] if the edges do not
    /// form a single loop.
    ///
    /// [`GeometryError::DisconnectedChain`]: facet_types::GeometryError::DisconnectedChain
    pub fn points(&self) -> GeometryResult<Vec<Point2<f64>>> {
        chain_edges(&self.edges)
    }

    /// The boundary as an open corner list, without the closing repeat.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DisconnectedChain`] if the edges do not
    /// form a single loop.
    ///
    /// [`GeometryError::DisconnectedChain`]: facet_types::GeometryError::DisconnectedChain
    pub fn corner_points(&self) -> GeometryResult<Vec<Point2<f64>>> {
        let mut points = self.points()?;
        points.pop();
        Ok(points)
    }

    /// Minimum and maximum coordinates over all edge endpoints, or `None`
    /// for an empty polygon.
    #[must_use]
    pub fn extents(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let mut endpoints = self.edges.iter().flatten();
        let first = endpoints.next()?;

        let (mut min, mut max) = (*first, *first);
        for point in endpoints {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }
        Some((min, max))
    }

    /// Width and height of the bounding box, zero for an empty polygon.
    #[must_use]
    pub fn dimensions(&self) -> (f64, f64) {
        self.extents()
            .map_or((0.0, 0.0), |(min, max)| (max.x - min.x, max.y - min.y))
    }

    /// A copy with every coordinate multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let edges = self
            .edges
            .iter()
            .map(|[start, end]| {
                [
                    Point2::from(start.coords * factor),
                    Point2::from(end.coords * factor),
                ]
            })
            .collect();
        Self { edges }
    }
}
