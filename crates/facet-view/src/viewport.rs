//! Perspective projection of model points onto a pixel canvas.

use facet_types::Point3;

use crate::perspective::Perspective;

/// Hard zoom bounds; commands past these are clamped.
const MIN_ZOOM_LEVEL: i32 = -300;
const MAX_ZOOM_LEVEL: i32 = 300;

/// Hard pan bounds per axis, in camera units.
const MIN_OFFSET: f64 = -500.0;
const MAX_OFFSET: f64 = 500.0;

/// Default horizontal field of view: 60 degrees in radians.
const DEFAULT_H_FOV: f64 = 1.042;

/// A camera over a fixed-size pixel canvas.
///
/// The viewport owns the interactive view state: an axis-aligned
/// [`Perspective`], a zoom level (more negative backs the camera away),
/// and a pan offset applied in camera space. [`Viewport::project_point`]
/// turns model points into integer pixel coordinates, with +Y in model
/// space mapping up the screen.
///
/// # Example
///
/// ```
/// use facet_types::Point3;
/// use facet_view::Viewport;
///
/// let viewport = Viewport::new((800, 600));
///
/// // The model origin lands in the middle of the canvas.
/// assert_eq!(viewport.project_point(Point3::new(0.0, 0.0, 0.0)), (400, 300));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Canvas size in pixels (width, height).
    pub dimensions: (u32, u32),
    /// Camera distance control. Starts at -10; clamped to [-300, 300].
    pub zoom_level: i32,
    /// Pan offset in camera units, clamped to [-500, 500] per axis.
    pub offset: [f64; 2],
    /// Horizontal field of view in radians.
    pub h_fov: f64,
    /// Active viewing direction.
    pub perspective: Perspective,
}

impl Viewport {
    /// Create a viewport over a canvas of the given pixel dimensions.
    #[must_use]
    pub fn new(dimensions: (u32, u32)) -> Self {
        Self {
            dimensions,
            zoom_level: -10,
            offset: [0.0, 0.0],
            h_fov: DEFAULT_H_FOV,
            perspective: Perspective::default(),
        }
    }

    /// Move the camera closer by `amount` zoom steps.
    ///
    /// The zoom level never leaves [-300, 300], whatever the amount.
    pub fn zoom_in(&mut self, amount: i32) {
        self.zoom_level = self
            .zoom_level
            .saturating_add(amount)
            .clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL);
    }

    /// Back the camera away by `amount` zoom steps.
    ///
    /// The zoom level never leaves [-300, 300], whatever the amount.
    pub fn zoom_out(&mut self, amount: i32) {
        self.zoom_level = self
            .zoom_level
            .saturating_sub(amount)
            .clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL);
    }

    /// Shift the view by `(dx, dy)` in camera units.
    ///
    /// Each offset axis is clamped to [-500, 500].
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset = [
            (self.offset[0] + dx).clamp(MIN_OFFSET, MAX_OFFSET),
            (self.offset[1] + dy).clamp(MIN_OFFSET, MAX_OFFSET),
        ];
    }

    /// Switch the viewing direction, keeping zoom and offset.
    pub fn set_perspective(&mut self, perspective: Perspective) {
        self.perspective = perspective;
    }

    /// Project a model point to integer pixel coordinates.
    ///
    /// The point is first remapped by the active perspective, panned by
    /// the offset, then divided by its distance from the camera. A point
    /// at exactly zero camera depth is nudged to -0.001 so the division
    /// stays finite; the zoom level is subtracted from the depth after
    /// the nudge. Screen coordinates truncate toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn project_point(&self, point: Point3<f64>) -> (i32, i32) {
        let mapped = self.perspective.map_point(point);

        // Only exactly zero gets the nudge; near-zero depths pass through.
        #[allow(clippy::float_cmp)]
        let depth_source = if mapped.z == 0.0 { -0.001 } else { mapped.z };
        let depth = depth_source - f64::from(self.zoom_level);

        let x_actual = mapped.x + self.offset[0];
        let y_actual = mapped.y + self.offset[1];

        let half_width = f64::from(self.dimensions.0) / 2.0;
        let half_height = f64::from(self.dimensions.1) / 2.0;
        let fov_scale = (self.h_fov / 2.0).tan();

        // The horizontal extent sets the scale for both axes, so pixels
        // stay square on non-square canvases.
        let x = half_width + x_actual / depth / fov_scale * half_width;
        let y = half_height - y_actual / depth / fov_scale * half_width;

        // Truncation: toward-zero snapping is the screen-space contract.
        (x as i32, y as i32)
    }

    /// Project a slice of model points, in order.
    #[must_use]
    pub fn project_points(&self, points: &[Point3<f64>]) -> Vec<(i32, i32)> {
        points.iter().map(|&p| self.project_point(p)).collect()
    }
}
