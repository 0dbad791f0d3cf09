//! Submitted model configurations and their acceptance rules

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DomainError;

/// Fields every submission must carry.
pub const REQUIRED_FIELDS: [&str; 2] = ["model_type", "hyperparameters"];

/// A validated model configuration.
///
/// Only `model_type` and `hyperparameters` are interpreted; any other fields
/// the client sends are carried through opaquely and persisted as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfiguration {
    pub model_type: String,
    pub hyperparameters: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModelConfiguration {
    /// Classify a submitted payload, first failure wins:
    ///
    /// 1. not a JSON object -> `InvalidPayload`
    /// 2. required keys absent -> `MissingFields` naming exactly the missing keys
    /// 3. `hyperparameters` not an object -> `InvalidHyperparameters`
    ///
    /// The three classes map to distinct HTTP statuses at the API layer and
    /// must not be collapsed.
    pub fn validate(payload: &Value) -> Result<Self, DomainError> {
        let object = payload.as_object().ok_or(DomainError::InvalidPayload)?;

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !object.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::missing_fields(missing));
        }

        if !object["hyperparameters"].is_object() {
            return Err(DomainError::InvalidHyperparameters);
        }

        // Required keys are present and well-shaped; a failure here means a
        // malformed value such as a non-string model_type.
        serde_json::from_value(payload.clone()).map_err(|_| DomainError::InvalidPayload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_payload_accepted() {
        let payload = json!({
            "model_type": "neural_network",
            "hyperparameters": {"epochs": 10, "batch_size": 32}
        });

        let config = ModelConfiguration::validate(&payload).unwrap();
        assert_eq!(config.model_type, "neural_network");
        assert_eq!(config.hyperparameters["epochs"], json!(10));
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let payload = json!({
            "model_type": "UNet",
            "hyperparameters": {"lr": 0.001},
            "dataset": "spleen_ct",
            "notes": {"author": "someone"}
        });

        let config = ModelConfiguration::validate(&payload).unwrap();
        assert_eq!(config.extra["dataset"], json!("spleen_ct"));

        // Round-trips back to the submitted shape.
        let serialized = serde_json::to_value(&config).unwrap();
        assert_eq!(serialized, payload);
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let result = ModelConfiguration::validate(&json!("not_a_json_object"));
        assert!(matches!(result, Err(DomainError::InvalidPayload)));

        let result = ModelConfiguration::validate(&json!(null));
        assert!(matches!(result, Err(DomainError::InvalidPayload)));
    }

    #[test]
    fn test_missing_fields_named_exactly() {
        let result = ModelConfiguration::validate(&json!({"model_type": "neural_network"}));
        match result {
            Err(DomainError::MissingFields { fields }) => {
                assert_eq!(fields, vec!["hyperparameters".to_string()]);
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }

        let result = ModelConfiguration::validate(&json!({}));
        match result {
            Err(DomainError::MissingFields { fields }) => {
                assert_eq!(
                    fields,
                    vec!["model_type".to_string(), "hyperparameters".to_string()]
                );
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_hyperparameters_rejected_as_distinct_class() {
        let payload = json!({
            "model_type": "x",
            "hyperparameters": "not_a_mapping"
        });
        let result = ModelConfiguration::validate(&payload);
        assert!(matches!(result, Err(DomainError::InvalidHyperparameters)));

        let payload = json!({
            "model_type": "x",
            "hyperparameters": [1, 2, 3]
        });
        let result = ModelConfiguration::validate(&payload);
        assert!(matches!(result, Err(DomainError::InvalidHyperparameters)));
    }

    #[test]
    fn test_non_string_model_type_rejected() {
        let payload = json!({
            "model_type": 42,
            "hyperparameters": {}
        });
        let result = ModelConfiguration::validate(&payload);
        assert!(matches!(result, Err(DomainError::InvalidPayload)));
    }
}
