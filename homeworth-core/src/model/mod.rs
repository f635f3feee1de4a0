//! # Model Store
//!
//! Loads a serialized regression artifact once at process start and holds
//! the fitted predictor together with the ordered feature-name schema it
//! was trained on. Immutable after load; a failed load degrades to an
//! explicit unloaded sentinel rather than aborting the process.

mod artifact;
mod predictor;
mod store;

pub use artifact::ModelArtifact;
pub use predictor::{LinearModel, Predictor};
pub use store::ModelStore;
