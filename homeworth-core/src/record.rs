//! Raw house-attribute records and input coercion.

use serde::Serialize;
use serde_json::Value;

use crate::error::PredictError;

/// One house, coerced from a raw JSON object.
///
/// Every field is optional in the request; missing numerics default to 0
/// and missing categoricals to their baseline value (`"no"`, or
/// `"furnished"` for `furnishingstatus`). Category values are NOT validated
/// against the training-time level sets: an unrecognized value simply
/// expands to all-zero indicator columns downstream, the same treatment an
/// unseen category got at training time.
///
/// The coerced record is echoed back to the caller as `features_used`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseRecord {
    pub area: f64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub stories: i64,
    pub parking: i64,
    pub mainroad: String,
    pub guestroom: String,
    pub basement: String,
    pub hotwaterheating: String,
    pub airconditioning: String,
    pub prefarea: String,
    pub furnishingstatus: String,
}

impl HouseRecord {
    /// Coerce a raw JSON body into a record.
    ///
    /// Numeric fields accept JSON numbers or numeric strings; anything else
    /// is an [`PredictError::InvalidInput`]. Categorical fields accept any
    /// value and stringify it.
    pub fn from_json(body: &Value) -> Result<Self, PredictError> {
        Ok(Self {
            area: float_field(body, "area")?,
            bedrooms: int_field(body, "bedrooms")?,
            bathrooms: int_field(body, "bathrooms")?,
            stories: int_field(body, "stories")?,
            parking: int_field(body, "parking")?,
            mainroad: string_field(body, "mainroad", "no"),
            guestroom: string_field(body, "guestroom", "no"),
            basement: string_field(body, "basement", "no"),
            hotwaterheating: string_field(body, "hotwaterheating", "no"),
            airconditioning: string_field(body, "airconditioning", "no"),
            prefarea: string_field(body, "prefarea", "no"),
            furnishingstatus: string_field(body, "furnishingstatus", "furnished"),
        })
    }

    /// Look up a categorical field's coerced value by column name.
    pub fn categorical(&self, name: &str) -> &str {
        match name {
            "mainroad" => &self.mainroad,
            "guestroom" => &self.guestroom,
            "basement" => &self.basement,
            "hotwaterheating" => &self.hotwaterheating,
            "airconditioning" => &self.airconditioning,
            "prefarea" => &self.prefarea,
            "furnishingstatus" => &self.furnishingstatus,
            _ => "",
        }
    }
}

impl Default for HouseRecord {
    fn default() -> Self {
        // Matches the documented request defaults.
        Self {
            area: 0.0,
            bedrooms: 0,
            bathrooms: 0,
            stories: 0,
            parking: 0,
            mainroad: "no".to_string(),
            guestroom: "no".to_string(),
            basement: "no".to_string(),
            hotwaterheating: "no".to_string(),
            airconditioning: "no".to_string(),
            prefarea: "no".to_string(),
            furnishingstatus: "furnished".to_string(),
        }
    }
}

fn float_field(body: &Value, key: &str) -> Result<f64, PredictError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            PredictError::invalid_input(format!("field '{key}' is not a representable number"))
        }),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            PredictError::invalid_input(format!("field '{key}' must be numeric, got '{s}'"))
        }),
        Some(other) => Err(PredictError::invalid_input(format!(
            "field '{key}' must be numeric, got {other}"
        ))),
    }
}

fn int_field(body: &Value, key: &str) -> Result<i64, PredictError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else {
                // Fractional counts truncate toward zero.
                n.as_f64().map(|f| f.trunc() as i64).ok_or_else(|| {
                    PredictError::invalid_input(format!(
                        "field '{key}' is not a representable integer"
                    ))
                })
            }
        }
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| {
            PredictError::invalid_input(format!("field '{key}' must be an integer, got '{s}'"))
        }),
        Some(other) => Err(PredictError::invalid_input(format!(
            "field '{key}' must be an integer, got {other}"
        ))),
    }
}

fn string_field(body: &Value, key: &str, default: &str) -> String {
    match body.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        // Non-string values stringify; an unseen category expands to
        // all-zero indicators anyway.
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_for_empty_body() {
        let record = HouseRecord::from_json(&json!({})).unwrap();
        assert_eq!(record.area, 0.0);
        assert_eq!(record.bedrooms, 0);
        assert_eq!(record.parking, 0);
        assert_eq!(record.mainroad, "no");
        assert_eq!(record.prefarea, "no");
        assert_eq!(record.furnishingstatus, "furnished");
        assert_eq!(record, HouseRecord::default());
    }

    #[test]
    fn test_numeric_coercion() {
        let record = HouseRecord::from_json(&json!({
            "area": 5000,
            "bedrooms": "3",
            "bathrooms": 2.9,
            "stories": 2,
        }))
        .unwrap();
        assert_eq!(record.area, 5000.0);
        assert_eq!(record.bedrooms, 3);
        // Fractional counts truncate.
        assert_eq!(record.bathrooms, 2);
        assert_eq!(record.stories, 2);
    }

    #[test]
    fn test_area_accepts_numeric_string() {
        let record = HouseRecord::from_json(&json!({"area": " 4200.5 "})).unwrap();
        assert_eq!(record.area, 4200.5);
    }

    #[test]
    fn test_area_rejects_non_numeric() {
        let err = HouseRecord::from_json(&json!({"area": "not-a-number"})).unwrap_err();
        match err {
            PredictError::InvalidInput(msg) => assert!(msg.contains("area")),
            _ => panic!("Expected InvalidInput, got {:?}", err),
        }
    }

    #[test]
    fn test_bedrooms_rejects_fractional_string() {
        let err = HouseRecord::from_json(&json!({"bedrooms": "2.5"})).unwrap_err();
        assert!(matches!(err, PredictError::InvalidInput(_)));
    }

    #[test]
    fn test_numeric_rejects_array() {
        let err = HouseRecord::from_json(&json!({"area": [1, 2]})).unwrap_err();
        assert!(matches!(err, PredictError::InvalidInput(_)));
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let record = HouseRecord::from_json(&json!({
            "area": null,
            "mainroad": null,
            "furnishingstatus": null,
        }))
        .unwrap();
        assert_eq!(record.area, 0.0);
        assert_eq!(record.mainroad, "no");
        assert_eq!(record.furnishingstatus, "furnished");
    }

    #[test]
    fn test_categorical_passthrough_without_validation() {
        let record = HouseRecord::from_json(&json!({
            "mainroad": "maybe",
            "furnishingstatus": "semi-furnished",
        }))
        .unwrap();
        assert_eq!(record.mainroad, "maybe");
        assert_eq!(record.furnishingstatus, "semi-furnished");
    }

    #[test]
    fn test_categorical_stringifies_non_strings() {
        let record = HouseRecord::from_json(&json!({"basement": 1})).unwrap();
        assert_eq!(record.basement, "1");
    }

    #[test]
    fn test_categorical_lookup() {
        let record = HouseRecord::from_json(&json!({"guestroom": "yes"})).unwrap();
        assert_eq!(record.categorical("guestroom"), "yes");
        assert_eq!(record.categorical("mainroad"), "no");
        assert_eq!(record.categorical("unknown"), "");
    }

    #[test]
    fn test_record_serializes_all_fields() {
        let record = HouseRecord::default();
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 12);
        assert_eq!(obj["furnishingstatus"], "furnished");
    }
}
