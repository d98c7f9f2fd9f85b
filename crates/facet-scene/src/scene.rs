//! Insertion-ordered collection of model placements.
//!
//! The [`Scene`] struct owns every [`ModelPlacement`] and keeps them in
//! the order they were added, so display and export walk the same
//! sequence on every run.

use facet_reduce::{ReduceParams, reduce_model};
use facet_types::{Model, Vector3};
use tracing::{debug, info};

use crate::error::{SceneError, SceneResult};
use crate::placement::ModelPlacement;

/// A collection of model placements, keyed by reference name.
///
/// Lookup is by reference; iteration follows insertion order. The
/// container is a plain vector with linear lookup, which keeps the
/// ordering explicit and is adequate at scene scale.
///
/// # Example
///
/// ```
/// use facet_reduce::ReduceParams;
/// use facet_scene::Scene;
/// use facet_types::{sample, Vector3};
///
/// let mut scene = Scene::new();
/// scene
///     .add_model("cube", sample::unit_cube(), Vector3::zeros())
///     .unwrap();
///
/// scene.reduce_all(&ReduceParams::default()).unwrap();
///
/// // Twelve triangles fused into six square sides.
/// assert_eq!(scene.get_model("cube").unwrap().face_count(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Placements in insertion order.
    placements: Vec<ModelPlacement>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            placements: Vec::new(),
        }
    }

    /// Add a model under a reference name at a world location.
    ///
    /// Convenience wrapper around [`add_placement`].
    ///
    /// [`add_placement`]: Scene::add_placement
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicatePlacement`] if the reference is
    /// already taken.
    pub fn add_model(
        &mut self,
        reference: impl Into<String>,
        model: Model,
        location: Vector3<f64>,
    ) -> SceneResult<()> {
        self.add_placement(ModelPlacement::new(reference, model).with_location(location))
    }

    /// Add a placement to the scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicatePlacement`] if a placement with
    /// the same reference already exists.
    pub fn add_placement(&mut self, placement: ModelPlacement) -> SceneResult<()> {
        if self.contains(placement.reference()) {
            return Err(SceneError::DuplicatePlacement {
                reference: placement.reference().to_string(),
            });
        }

        self.placements.push(placement);
        Ok(())
    }

    /// Get a placement's model by reference.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::PlacementNotFound`] if no placement has
    /// the given reference.
    pub fn get_model(&self, reference: &str) -> SceneResult<&Model> {
        self.get_placement(reference).map(ModelPlacement::model)
    }

    /// Get a placement by reference.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::PlacementNotFound`] if no placement has
    /// the given reference.
    pub fn get_placement(&self, reference: &str) -> SceneResult<&ModelPlacement> {
        self.placements
            .iter()
            .find(|placement| placement.reference() == reference)
            .ok_or_else(|| SceneError::PlacementNotFound {
                reference: reference.to_string(),
            })
    }

    /// Get a mutable placement by reference.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::PlacementNotFound`] if no placement has
    /// the given reference.
    pub fn get_placement_mut(&mut self, reference: &str) -> SceneResult<&mut ModelPlacement> {
        self.placements
            .iter_mut()
            .find(|placement| placement.reference() == reference)
            .ok_or_else(|| SceneError::PlacementNotFound {
                reference: reference.to_string(),
            })
    }

    /// Check if a placement exists.
    #[must_use]
    pub fn contains(&self, reference: &str) -> bool {
        self.placements
            .iter()
            .any(|placement| placement.reference() == reference)
    }

    /// Iterate over placements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelPlacement> {
        self.placements.iter()
    }

    /// Number of placements.
    #[must_use]
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Check if the scene has no placements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Reduce every placement's model and assign the results.
    ///
    /// All models are reduced before any placement is updated, so a
    /// failure leaves the scene unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Reduce`] if any model fails to reduce.
    pub fn reduce_all(&mut self, params: &ReduceParams) -> SceneResult<()> {
        info!(placements = self.placements.len(), "Reducing scene models");

        let mut reduced = Vec::with_capacity(self.placements.len());
        for placement in &self.placements {
            debug!(reference = placement.reference(), "Reducing placement");
            reduced.push(reduce_model(placement.model(), params)?);
        }

        for (placement, model) in self.placements.iter_mut().zip(reduced) {
            placement.set_model(model);
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a ModelPlacement;
    type IntoIter = std::slice::Iter<'a, ModelPlacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use facet_types::{Face, sample};

    #[test]
    fn add_and_get_model() {
        let mut scene = Scene::new();
        scene
            .add_model("cube", sample::unit_cube(), Vector3::zeros())
            .unwrap();

        assert_eq!(scene.get_model("cube").unwrap().face_count(), 12);
        assert!(scene.contains("cube"));
        assert_eq!(scene.placement_count(), 1);
    }

    #[test]
    fn duplicate_reference_rejected() {
        let mut scene = Scene::new();
        scene
            .add_model("cube", sample::unit_cube(), Vector3::zeros())
            .unwrap();

        let result = scene.add_model("cube", sample::unit_cube(), Vector3::zeros());
        assert!(matches!(
            result,
            Err(SceneError::DuplicatePlacement { reference }) if reference == "cube"
        ));

        // The first placement survives untouched.
        assert_eq!(scene.placement_count(), 1);
    }

    #[test]
    fn missing_reference_reported() {
        let scene = Scene::new();

        assert!(matches!(
            scene.get_model("ghost"),
            Err(SceneError::PlacementNotFound { reference }) if reference == "ghost"
        ));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut scene = Scene::new();
        for reference in ["charlie", "alpha", "bravo"] {
            scene
                .add_model(reference, sample::unit_cube(), Vector3::zeros())
                .unwrap();
        }

        let order: Vec<&str> = scene.iter().map(ModelPlacement::reference).collect();
        assert_eq!(order, ["charlie", "alpha", "bravo"]);
    }

    #[test]
    fn placement_mut_allows_selection() {
        let mut scene = Scene::new();
        scene
            .add_model("cube", sample::unit_cube(), Vector3::zeros())
            .unwrap();

        scene
            .get_placement_mut("cube")
            .unwrap()
            .set_active_face(Some(3));

        assert_eq!(scene.get_placement("cube").unwrap().active_face(), Some(3));
    }

    #[test]
    fn reduce_all_replaces_models() {
        let mut scene = Scene::new();
        scene
            .add_model("near", sample::unit_cube(), Vector3::zeros())
            .unwrap();
        scene
            .add_model("far", sample::unit_cube(), Vector3::new(10.0, 0.0, 0.0))
            .unwrap();

        scene.reduce_all(&ReduceParams::default()).unwrap();

        assert_eq!(scene.get_model("near").unwrap().face_count(), 6);
        assert_eq!(scene.get_model("far").unwrap().face_count(), 6);
    }

    #[test]
    fn reduce_all_failure_leaves_scene_unchanged() {
        let mut degenerate = Model::new();
        degenerate.add_face(Face::new(Vec::new(), Vector3::zeros()));

        let mut scene = Scene::new();
        scene
            .add_model("cube", sample::unit_cube(), Vector3::zeros())
            .unwrap();
        scene
            .add_model("broken", degenerate, Vector3::zeros())
            .unwrap();

        let result = scene.reduce_all(&ReduceParams::default());

        assert!(matches!(result, Err(SceneError::Reduce(_))));
        assert_eq!(scene.get_model("cube").unwrap().face_count(), 12);
    }

    #[test]
    fn empty_scene() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.placement_count(), 0);
        assert_eq!(scene.iter().count(), 0);
    }
}
