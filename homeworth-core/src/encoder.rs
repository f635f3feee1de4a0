//! Deterministic feature encoding against a trained model's schema.
//!
//! The training pipeline one-hot-encodes categorical columns with the
//! alphabetically-first category level dropped (the implicit baseline), and
//! the resulting column set becomes the permanent contract the server must
//! reconstruct exactly per request. A single-row expansion at inference
//! time cannot reproduce every column the multi-row training expansion
//! produced, so the schema drives the final projection: missing columns are
//! zero-filled, extra columns are dropped.

use std::collections::BTreeMap;

use crate::record::HouseRecord;

/// A categorical field and its training-time category levels, sorted.
/// The first level is the dropped baseline.
struct CategoricalField {
    name: &'static str,
    levels: &'static [&'static str],
}

const CATEGORICALS: &[CategoricalField] = &[
    CategoricalField {
        name: "mainroad",
        levels: &["no", "yes"],
    },
    CategoricalField {
        name: "guestroom",
        levels: &["no", "yes"],
    },
    CategoricalField {
        name: "basement",
        levels: &["no", "yes"],
    },
    CategoricalField {
        name: "hotwaterheating",
        levels: &["no", "yes"],
    },
    CategoricalField {
        name: "airconditioning",
        levels: &["no", "yes"],
    },
    CategoricalField {
        name: "prefarea",
        levels: &["no", "yes"],
    },
    CategoricalField {
        name: "furnishingstatus",
        levels: &["furnished", "semi-furnished", "unfurnished"],
    },
];

/// Encode one record into the exact column order of `schema`.
///
/// Pure and deterministic: identical input always yields identical output,
/// and the result has length `schema.len()` with columns in schema order.
/// An unrecognized category value leaves all of its indicator columns at
/// zero, indistinguishable from the dropped baseline level.
pub fn encode(record: &HouseRecord, schema: &[String]) -> Vec<f64> {
    let mut columns: BTreeMap<String, f64> = BTreeMap::new();

    columns.insert("area".to_string(), record.area);
    columns.insert("bedrooms".to_string(), record.bedrooms as f64);
    columns.insert("bathrooms".to_string(), record.bathrooms as f64);
    columns.insert("stories".to_string(), record.stories as f64);
    columns.insert("parking".to_string(), record.parking as f64);

    for field in CATEGORICALS {
        let value = record.categorical(field.name);
        // Drop-first: one indicator per level except the sorted-first baseline.
        for level in &field.levels[1..] {
            let on = value == *level;
            columns.insert(
                format!("{}_{}", field.name, level),
                if on { 1.0 } else { 0.0 },
            );
        }
    }

    // Project: zero-fill schema columns the expansion missed, drop the rest.
    schema
        .iter()
        .map(|name| columns.get(name).copied().unwrap_or(0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// The column order produced by the training pipeline on the housing
    /// dataset: numeric columns first, then the surviving indicators.
    fn training_schema() -> Vec<String> {
        [
            "area",
            "bedrooms",
            "bathrooms",
            "stories",
            "parking",
            "mainroad_yes",
            "guestroom_yes",
            "basement_yes",
            "hotwaterheating_yes",
            "airconditioning_yes",
            "prefarea_yes",
            "furnishingstatus_semi-furnished",
            "furnishingstatus_unfurnished",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn record(body: serde_json::Value) -> HouseRecord {
        HouseRecord::from_json(&body).unwrap()
    }

    #[test]
    fn test_vector_matches_schema_length_and_order() {
        let schema = training_schema();
        let vector = encode(
            &record(json!({
                "area": 5000, "bedrooms": 3, "bathrooms": 2, "stories": 2,
                "parking": 1, "mainroad": "yes", "guestroom": "no",
                "basement": "yes", "hotwaterheating": "no",
                "airconditioning": "yes", "prefarea": "yes",
                "furnishingstatus": "semi-furnished",
            })),
            &schema,
        );
        assert_eq!(vector.len(), schema.len());
        assert_eq!(
            vector,
            vec![5000.0, 3.0, 2.0, 2.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_encode_is_pure() {
        let schema = training_schema();
        let rec = record(json!({"area": 1200, "mainroad": "yes"}));
        assert_eq!(encode(&rec, &schema), encode(&rec, &schema));
    }

    #[test]
    fn test_binary_no_yields_zero_indicator() {
        let schema = vec!["mainroad_yes".to_string()];
        assert_eq!(encode(&record(json!({"mainroad": "no"})), &schema), [0.0]);
        assert_eq!(encode(&record(json!({"mainroad": "yes"})), &schema), [1.0]);
    }

    #[test]
    fn test_furnishingstatus_indicators() {
        let schema = vec![
            "furnishingstatus_semi-furnished".to_string(),
            "furnishingstatus_unfurnished".to_string(),
        ];
        // The sorted-first level is the baseline: both indicators stay zero.
        assert_eq!(
            encode(&record(json!({"furnishingstatus": "furnished"})), &schema),
            [0.0, 0.0]
        );
        assert_eq!(
            encode(
                &record(json!({"furnishingstatus": "semi-furnished"})),
                &schema
            ),
            [1.0, 0.0]
        );
        assert_eq!(
            encode(
                &record(json!({"furnishingstatus": "unfurnished"})),
                &schema
            ),
            [0.0, 1.0]
        );
    }

    #[test]
    fn test_unknown_category_expands_to_all_zeros() {
        let schema = training_schema();
        let vector = encode(
            &record(json!({"mainroad": "maybe", "furnishingstatus": "palatial"})),
            &schema,
        );
        assert_eq!(vector[5], 0.0); // mainroad_yes
        assert_eq!(vector[11], 0.0); // furnishingstatus_semi-furnished
        assert_eq!(vector[12], 0.0); // furnishingstatus_unfurnished
    }

    #[test]
    fn test_schema_columns_absent_from_expansion_are_zero_filled() {
        let schema = vec!["area".to_string(), "garden_yes".to_string()];
        let vector = encode(&record(json!({"area": 900})), &schema);
        assert_eq!(vector, [900.0, 0.0]);
    }

    #[test]
    fn test_expanded_columns_absent_from_schema_are_dropped() {
        let schema = vec!["bedrooms".to_string()];
        let vector = encode(
            &record(json!({"bedrooms": 4, "mainroad": "yes", "area": 9999})),
            &schema,
        );
        assert_eq!(vector, [4.0]);
    }

    #[test]
    fn test_empty_schema_yields_empty_vector() {
        assert!(encode(&record(json!({"area": 100})), &[]).is_empty());
    }
}
