//! Projection of planar 3D faces onto the plane.

use facet_types::{Face, GeometryError, Model, Point2, Point3, Vector3};

use crate::error::{FlattenError, FlattenResult};
use crate::polygon::Polygon2d;

/// Flatten a planar face into plane coordinates.
///
/// The plane basis is built from the face itself: the origin is the first
/// edge's start point, the X axis is the first edge's direction, and the
/// Y axis is the stored normal crossed with X. Each edge endpoint is then
/// projected by dot products. Edge lengths and angles survive exactly;
/// where the face lands in the plane depends only on its first edge.
///
/// # Errors
///
/// - [`FlattenError::EmptyFace`] if the face has no edges.
/// - [`FlattenError::Geometry`] if the first edge has zero length or the
///   stored normal is parallel to it.
///
/// # Example
///
/// ```
/// use facet_flatten::flatten_face;
/// use facet_types::{Face, Point3};
///
/// let face = Face::triangle(
///     Point3::new(0.0, 0.0, 7.0),
///     Point3::new(3.0, 0.0, 7.0),
///     Point3::new(3.0, 4.0, 7.0),
///     None,
/// );
///
/// let polygon = flatten_face(&face).unwrap();
/// let points = polygon.corner_points().unwrap();
/// assert_eq!(points[0], facet_types::Point2::new(0.0, 0.0));
/// assert_eq!(points[1], facet_types::Point2::new(3.0, 0.0));
/// ```
pub fn flatten_face(face: &Face) -> FlattenResult<Polygon2d> {
    let Some(first) = face.edges.first() else {
        return Err(FlattenError::EmptyFace);
    };

    let origin = first.start;
    let x_axis = unit(first.vector())?;
    let y_axis = unit(face.normal.cross(&x_axis))?;

    let mut polygon = Polygon2d::new();
    for edge in &face.edges {
        polygon.add_edge(
            project(origin, &x_axis, &y_axis, edge.start),
            project(origin, &x_axis, &y_axis, edge.end),
        );
    }
    Ok(polygon)
}

/// Flatten every face of a model, in model order.
///
/// # Errors
///
/// Fails on the first face that cannot be flattened; see [`flatten_face`].
pub fn flatten_model(model: &Model) -> FlattenResult<Vec<Polygon2d>> {
    model.iter().map(flatten_face).collect()
}

/// Project a 3D point into plane coordinates.
fn project(
    origin: Point3<f64>,
    x_axis: &Vector3<f64>,
    y_axis: &Vector3<f64>,
    point: Point3<f64>,
) -> Point2<f64> {
    let rel = point - origin;
    Point2::new(rel.dot(x_axis), rel.dot(y_axis))
}

/// Normalize a basis vector, rejecting near-zero lengths.
fn unit(vector: Vector3<f64>) -> FlattenResult<Vector3<f64>> {
    let length_sq = vector.norm_squared();
    if length_sq <= f64::EPSILON {
        return Err(FlattenError::Geometry(GeometryError::DegenerateFace));
    }
    Ok(vector / length_sq.sqrt())
}
