//! The in-process model store.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::{LinearModel, ModelArtifact, Predictor};
use crate::error::{ModelLoadError, PredictError};

/// Holds the fitted predictor and the ordered feature-name schema.
///
/// Created once at process start, read-only afterwards, so request handlers
/// can share it behind an `Arc` without locking. A store whose artifact
/// failed to load carries the unloaded sentinel: inference against it
/// reports [`PredictError::ModelNotLoaded`] instead of crashing.
#[derive(Debug)]
pub struct ModelStore {
    state: StoreState,
}

#[derive(Debug)]
enum StoreState {
    Loaded {
        predictor: LinearModel,
        feature_names: Vec<String>,
    },
    Unloaded,
}

impl ModelStore {
    /// Read and resolve the artifact at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ModelLoadError::ArtifactNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = fs::read_to_string(path)?;
        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|e| ModelLoadError::CorruptArtifact {
                message: e.to_string(),
            })?;
        let (predictor, feature_names) = artifact.into_parts();

        if predictor.n_features() == 0 {
            return Err(ModelLoadError::UnusablePredictor {
                message: "model has no coefficients".to_string(),
            });
        }

        info!(
            path = %path.display(),
            features = feature_names.len(),
            "model loaded"
        );
        Ok(Self {
            state: StoreState::Loaded {
                predictor,
                feature_names,
            },
        })
    }

    /// The sentinel for a store whose artifact failed to load.
    pub fn unloaded() -> Self {
        Self {
            state: StoreState::Unloaded,
        }
    }

    /// Load the artifact, degrading to the unloaded sentinel on failure.
    ///
    /// Startup never aborts on a bad artifact; the server comes up and
    /// answers every prediction request with a service-unavailable error
    /// until a valid model is supplied.
    pub fn load_or_unloaded(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(store) => store,
            Err(e) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "model load failed, serving without a model"
                );
                Self::unloaded()
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, StoreState::Loaded { .. })
    }

    /// The ordered feature-column schema the predictor expects.
    ///
    /// Empty both for the unloaded sentinel and for a schemaless artifact.
    pub fn feature_names(&self) -> &[String] {
        match &self.state {
            StoreState::Loaded { feature_names, .. } => feature_names,
            StoreState::Unloaded => &[],
        }
    }

    /// Run the predictor on a single-row batch and return its only output.
    ///
    /// Side-effect-free.
    pub fn predict(&self, vector: &[f64]) -> Result<f64, PredictError> {
        let predictor = match &self.state {
            StoreState::Loaded { predictor, .. } => predictor,
            StoreState::Unloaded => return Err(PredictError::ModelNotLoaded),
        };
        let outputs = predictor.predict_batch(&[vector.to_vec()])?;
        outputs
            .first()
            .copied()
            .ok_or_else(|| PredictError::inference("predictor returned no output"))
    }
}
