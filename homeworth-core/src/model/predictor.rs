//! The fitted predictor behind the model store.

use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Batch-predict capability every served model must expose.
///
/// The store always calls this with a single-row batch and takes the first
/// output; batch shape is kept so the contract matches how the model was
/// driven during training and evaluation.
pub trait Predictor: Send + Sync {
    /// Predict one output per input row.
    fn predict_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictError>;
}

/// A fitted ordinary-least-squares regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    /// Number of feature columns the model expects.
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }
}

impl Predictor for LinearModel {
    fn predict_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictError> {
        rows.iter()
            .map(|row| {
                if row.len() != self.coefficients.len() {
                    return Err(PredictError::inference(format!(
                        "feature vector has {} columns, model expects {}",
                        row.len(),
                        self.coefficients.len()
                    )));
                }
                let dot: f64 = row
                    .iter()
                    .zip(&self.coefficients)
                    .map(|(x, w)| x * w)
                    .sum();
                Ok(self.intercept + dot)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearModel {
        LinearModel {
            intercept: 10.0,
            coefficients: vec![2.0, -1.0, 0.5],
        }
    }

    #[test]
    fn test_predict_single_row() {
        let out = model().predict_batch(&[vec![1.0, 2.0, 4.0]]).unwrap();
        assert_eq!(out, vec![10.0 + 2.0 - 2.0 + 2.0]);
    }

    #[test]
    fn test_predict_multiple_rows() {
        let out = model()
            .predict_batch(&[vec![0.0, 0.0, 0.0], vec![1.0, 0.0, 0.0]])
            .unwrap();
        assert_eq!(out, vec![10.0, 12.0]);
    }

    #[test]
    fn test_predict_width_mismatch() {
        let err = model().predict_batch(&[vec![1.0, 2.0]]).unwrap_err();
        match err {
            PredictError::Inference(msg) => {
                assert!(msg.contains("2 columns"));
                assert!(msg.contains("expects 3"));
            }
            _ => panic!("Expected Inference error, got {:?}", err),
        }
    }

    #[test]
    fn test_model_roundtrip() {
        let json = serde_json::to_string(&model()).unwrap();
        let restored: LinearModel = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, model());
        assert_eq!(restored.n_features(), 3);
    }
}
