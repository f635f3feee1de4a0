//! On-disk model artifact shapes.

use serde::Deserialize;

use super::LinearModel;

/// A model artifact as serialized by the training pipeline.
///
/// Two shapes exist in the wild: a mapping carrying the model together with
/// the ordered feature-name schema it was trained on, or a bare model object
/// from an older pipeline run. The shape is resolved exactly once, at load
/// time.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ModelArtifact {
    WithSchema {
        model: LinearModel,
        feature_names: Vec<String>,
    },
    Bare(LinearModel),
}

impl ModelArtifact {
    /// Split the artifact into the predictor and its feature schema.
    ///
    /// A bare artifact has no schema; encoding against it degenerates to an
    /// empty vector, which the predictor rejects at inference time as a
    /// width mismatch.
    pub fn into_parts(self) -> (LinearModel, Vec<String>) {
        match self {
            Self::WithSchema {
                model,
                feature_names,
            } => (model, feature_names),
            Self::Bare(model) => (model, Vec::new()),
        }
    }
}
