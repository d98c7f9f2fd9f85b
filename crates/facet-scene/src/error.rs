//! Error types for scene operations.

use thiserror::Error;

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur during scene operations.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A placement with the given reference already exists.
    #[error("placement '{reference}' already exists in scene")]
    DuplicatePlacement {
        /// The duplicate reference.
        reference: String,
    },

    /// No placement with the given reference.
    #[error("placement '{reference}' not found in scene")]
    PlacementNotFound {
        /// The missing reference.
        reference: String,
    },

    /// Reduction failed for a placement's model.
    #[error("reduction failed: {0}")]
    Reduce(#[from] facet_reduce::ReduceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SceneError::DuplicatePlacement {
            reference: "bracket".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "placement 'bracket' already exists in scene"
        );

        let err = SceneError::PlacementNotFound {
            reference: "lid".to_string(),
        };
        assert!(format!("{err}").contains("lid"));
    }
}
