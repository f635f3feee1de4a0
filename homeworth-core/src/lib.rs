//! # homeworth-core — house-price inference serving
//!
//! Loads a trained regression artifact once at process start and serves
//! predictions over HTTP: raw house attributes in, a deterministically
//! encoded feature vector through the model, a formatted price out.
//!
//! The crate is organized around three components:
//! - [`model`] — the model store: artifact loading and inference delegation
//! - [`encoder`] + [`record`] — feature encoding against the model's schema
//! - [`service`] + [`server`] — per-request orchestration and the HTTP gateway

pub mod config;
pub mod encoder;
pub mod error;
pub mod model;
pub mod record;
pub mod server;
pub mod service;

pub use config::{load_config, AppConfig};
pub use error::{ModelLoadError, PredictError};
pub use model::ModelStore;
pub use record::HouseRecord;
pub use server::{router, run, AppContext, SharedContext};
pub use service::{Prediction, PredictionService};
