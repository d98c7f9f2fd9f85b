//! SVG export of flattened faces.

use std::fmt::Write;

use facet_types::{Model, Point2};
use tracing::info;

use crate::error::FlattenResult;
use crate::flatten::flatten_face;
use crate::polygon::Polygon2d;

/// Parameters for SVG export.
///
/// At the default scale of 1.0 coordinates are written in model units
/// (one SVG user unit per model unit), so a pattern exported from a
/// millimetre model cuts at true size.
#[derive(Debug, Clone)]
pub struct SvgExportParams {
    /// Uniform scale factor applied to all pattern coordinates.
    pub scale: f64,
    /// Margin around the content in output units.
    pub margin: f64,
    /// Stroke width for outlines in output units.
    pub stroke_width: f64,
    /// Stroke color for outlines (CSS color string).
    pub stroke_color: String,
    /// Fill color for faces, or "none".
    pub fill_color: String,
}

impl Default for SvgExportParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            margin: 5.0,
            stroke_width: 0.5,
            stroke_color: "black".to_string(),
            fill_color: "none".to_string(),
        }
    }
}

impl SvgExportParams {
    /// Create params with custom colors.
    #[must_use]
    pub fn with_colors(mut self, fill: &str, stroke: &str) -> Self {
        self.fill_color = fill.to_string();
        self.stroke_color = stroke.to_string();
        self
    }

    /// Create params with a custom scale factor.
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Create params with a custom margin.
    #[must_use]
    pub const fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}

/// Export every face of a model as a flattened SVG polygon.
///
/// Each face is flattened independently, so all patterns share the plane
/// origin and overlap; they are separated downstream by whatever nesting
/// or cutting tool consumes the file. The viewBox covers the joint extents
/// of all patterns plus the margin.
///
/// # Errors
///
/// Fails if any face cannot be flattened or its outline cannot be chained;
/// see [`flatten_face`].
///
/// # Example
///
/// ```
/// use facet_flatten::{export_model_svg, SvgExportParams};
/// use facet_types::sample;
///
/// let cube = sample::unit_cube();
/// let svg = export_model_svg(&cube, &SvgExportParams::default()).unwrap();
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("<polygon"));
/// ```
pub fn export_model_svg(model: &Model, params: &SvgExportParams) -> FlattenResult<String> {
    let mut polygons = Vec::with_capacity(model.face_count());
    for face in model {
        polygons.push(flatten_face(face)?.scaled(params.scale));
    }

    info!(faces = polygons.len(), "Exporting flattened model to SVG");

    let Some((min, max)) = joint_extents(&polygons) else {
        return Ok(format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\">\n\
  <text x=\"50%\" y=\"50%\" text-anchor=\"middle\" fill=\"#999\">Empty model</text>\n\
</svg>"
        ));
    };

    let width = (max.x - min.x) + 2.0 * params.margin;
    let height = (max.y - min.y) + 2.0 * params.margin;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.4}" height="{height:.4}" viewBox="{:.4} {:.4} {width:.4} {height:.4}">
"#,
        min.x - params.margin,
        min.y - params.margin,
    );

    for polygon in &polygons {
        let corners = polygon.corner_points()?;

        let mut list = String::new();
        for point in &corners {
            if !list.is_empty() {
                list.push(' ');
            }
            let _ = write!(list, "{:.4},{:.4}", point.x, point.y);
        }

        let _ = writeln!(
            svg,
            r#"  <polygon points="{}" fill="{}" stroke="{}" stroke-width="{:.2}"/>"#,
            list, params.fill_color, params.stroke_color, params.stroke_width
        );
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Combined bounding box of several polygons, or `None` if all are empty.
fn joint_extents(polygons: &[Polygon2d]) -> Option<(Point2<f64>, Point2<f64>)> {
    let mut combined: Option<(Point2<f64>, Point2<f64>)> = None;

    for polygon in polygons {
        let Some((min, max)) = polygon.extents() else {
            continue;
        };
        combined = Some(match combined {
            None => (min, max),
            Some((mut lo, mut hi)) => {
                lo.x = lo.x.min(min.x);
                lo.y = lo.y.min(min.y);
                hi.x = hi.x.max(max.x);
                hi.y = hi.y.max(max.y);
                (lo, hi)
            }
        });
    }
    combined
}
