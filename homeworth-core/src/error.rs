//! Error types for the Homeworth core library.
//!
//! Uses `thiserror` for public API error types. Startup failures
//! (`ModelLoadError`) and request-time failures (`PredictError`) are kept
//! separate: the former is handled once when the process boots, the latter
//! is converted into a JSON error envelope at the request boundary.

use std::path::PathBuf;

/// Errors raised while loading a model artifact at startup.
///
/// Startup converts these into the unloaded store sentinel instead of
/// crashing the process; see [`crate::model::ModelStore::load_or_unloaded`].
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("model artifact not found: {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("model artifact is corrupt: {message}")]
    CorruptArtifact { message: String },

    #[error("predictor is unusable: {message}")]
    UnusablePredictor { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-time prediction failures.
///
/// Every variant maps to exactly one HTTP status via [`PredictError::status_code`];
/// the gateway never does blanket catch-and-guess.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The model artifact failed to load at startup; the store holds the
    /// unloaded sentinel and every request reports service-unavailable.
    #[error("Model not loaded. Please train the model first.")]
    ModelNotLoaded,

    /// A numeric field in the request body could not be coerced.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The predictor rejected the encoded vector (typically a width mismatch).
    #[error("Inference failed: {0}")]
    Inference(String),
}

impl PredictError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Explicit kind-to-status mapping.
    ///
    /// Inference failures count as client-attributable: they stem from
    /// malformed feature vectors, not from server state.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ModelNotLoaded => 500,
            Self::InvalidInput(_) | Self::Inference(_) => 400,
        }
    }
}
