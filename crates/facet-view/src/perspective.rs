//! Axis-aligned viewing directions.

use facet_types::Point3;

/// A viewing direction along one of the coordinate axes.
///
/// Each perspective remaps model coordinates into camera coordinates, so
/// the projection math can stay fixed: camera +X runs right across the
/// screen, +Y up, and +Z away from the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Perspective {
    /// Looking at the front of the model, along +Z.
    #[default]
    Front,
    /// Looking down from above, along -Y.
    Top,
    /// Looking at the left side, along +X.
    Left,
    /// Looking at the right side, along -X.
    Right,
    /// Looking up from below, along +Y.
    Bottom,
    /// Looking at the back of the model, along -Z.
    Back,
}

impl Perspective {
    /// Remap a model-space point into camera space for this perspective.
    ///
    /// # Example
    ///
    /// ```
    /// use facet_types::Point3;
    /// use facet_view::Perspective;
    ///
    /// let p = Point3::new(1.0, 2.0, 3.0);
    /// assert_eq!(Perspective::Top.map_point(p), Point3::new(1.0, 3.0, 2.0));
    /// ```
    #[must_use]
    pub fn map_point(self, point: Point3<f64>) -> Point3<f64> {
        match self {
            Self::Front => point,
            Self::Top => Point3::new(point.x, point.z, point.y),
            Self::Left => Point3::new(-point.z, point.y, point.x),
            Self::Right => Point3::new(point.z, point.y, -point.x),
            Self::Bottom => Point3::new(point.x, -point.z, point.y),
            Self::Back => Point3::new(-point.x, point.y, -point.z),
        }
    }
}
