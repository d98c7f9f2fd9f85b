//! Individual model placements in a scene.
//!
//! A [`ModelPlacement`] is a model in the context of a scene: a unique
//! reference name, the model itself, a world location, and an optional
//! selected face.

use facet_types::{Model, Vector3};

/// A model in the context of a scene.
///
/// The reference is fixed at construction; the scene relies on it to
/// stay unique. The model is replaced wholesale through [`set_model`],
/// never mutated in place.
///
/// [`set_model`]: ModelPlacement::set_model
///
/// # Example
///
/// ```
/// use facet_scene::ModelPlacement;
/// use facet_types::{sample, Vector3};
///
/// let placement = ModelPlacement::new("cube", sample::unit_cube())
///     .with_location(Vector3::new(10.0, 0.0, 0.0));
///
/// assert_eq!(placement.reference(), "cube");
/// assert_eq!(placement.model().face_count(), 12);
/// assert!(placement.active_face().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ModelPlacement {
    /// Unique reference name within the owning scene.
    reference: String,

    /// The placed model.
    model: Model,

    /// World location of the model's local origin.
    location: Vector3<f64>,

    /// Index of the currently selected face, if any.
    active_face: Option<usize>,
}

impl ModelPlacement {
    /// Create a placement at the origin with no face selected.
    #[must_use]
    pub fn new(reference: impl Into<String>, model: Model) -> Self {
        Self {
            reference: reference.into(),
            model,
            location: Vector3::zeros(),
            active_face: None,
        }
    }

    /// Set the world location (builder pattern).
    #[must_use]
    pub fn with_location(mut self, location: Vector3<f64>) -> Self {
        self.location = location;
        self
    }

    /// Get the reference name.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Get the placed model.
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Replace the placed model.
    ///
    /// This is the explicit state transition used after reduction. The
    /// active face is cleared since its index refers to the replaced
    /// face list.
    pub fn set_model(&mut self, model: Model) {
        self.model = model;
        self.active_face = None;
    }

    /// Get the world location.
    #[must_use]
    pub fn location(&self) -> Vector3<f64> {
        self.location
    }

    /// Set the world location.
    pub fn set_location(&mut self, location: Vector3<f64>) {
        self.location = location;
    }

    /// Get the index of the currently selected face, if any.
    #[must_use]
    pub fn active_face(&self) -> Option<usize> {
        self.active_face
    }

    /// Select a face by index, or pass `None` to clear the selection.
    ///
    /// The index refers to the current model's face list and is not
    /// validated here; the display collaborator owns that mapping.
    pub fn set_active_face(&mut self, face: Option<usize>) {
        self.active_face = face;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use facet_types::{Point3, sample};

    #[test]
    fn new_placement_defaults() {
        let placement = ModelPlacement::new("cube", sample::unit_cube());

        assert_eq!(placement.reference(), "cube");
        assert_eq!(placement.location(), Vector3::zeros());
        assert!(placement.active_face().is_none());
    }

    #[test]
    fn with_location_builder() {
        let placement = ModelPlacement::new("cube", sample::unit_cube())
            .with_location(Vector3::new(1.0, 2.0, 3.0));

        assert_eq!(placement.location(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn set_active_face_records_and_clears() {
        let mut placement = ModelPlacement::new("cube", sample::unit_cube());

        placement.set_active_face(Some(4));
        assert_eq!(placement.active_face(), Some(4));

        placement.set_active_face(None);
        assert!(placement.active_face().is_none());
    }

    #[test]
    fn set_model_replaces_and_clears_selection() {
        let mut placement = ModelPlacement::new("cube", sample::unit_cube());
        placement.set_active_face(Some(7));

        placement.set_model(sample::cube(Point3::origin(), 2.0));

        assert_eq!(placement.model().face_count(), 12);
        assert!(placement.active_face().is_none());
    }
}
