//! Prediction service: per-request encode → infer → format pipeline.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::encoder;
use crate::error::PredictError;
use crate::model::ModelStore;
use crate::record::HouseRecord;

/// A successful prediction, serialized directly as the response body.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub success: bool,
    pub predicted_price: f64,
    pub formatted_price: String,
    pub features_used: HouseRecord,
}

/// Orchestrates the model store and feature encoder for one request at a
/// time. Holds the store by value; the whole service is shared read-only
/// across request handlers.
#[derive(Debug)]
pub struct PredictionService {
    store: ModelStore,
}

impl PredictionService {
    pub fn new(store: ModelStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Run one prediction against a raw JSON request body.
    ///
    /// States: validate (store loaded?) → encode → infer → format. Each
    /// failure carries its own [`PredictError`] kind; the gateway maps
    /// kinds to HTTP statuses.
    pub fn predict(&self, body: &Value) -> Result<Prediction, PredictError> {
        if !self.store.is_loaded() {
            return Err(PredictError::ModelNotLoaded);
        }

        let record = HouseRecord::from_json(body)?;
        let vector = encoder::encode(&record, self.store.feature_names());
        let raw = self.store.predict(&vector)?;

        // Prices never go negative, whatever the model says.
        let price = raw.max(0.0);
        debug!(raw, price, "prediction complete");

        Ok(Prediction {
            success: true,
            predicted_price: round2(price),
            formatted_price: format_pkr(price),
            features_used: record,
        })
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Format a non-negative amount as `PKR <comma-grouped integer>`.
pub fn format_pkr(amount: f64) -> String {
    let digits = (amount.round() as i64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("PKR {grouped}")
}
