//! Training-script generation
//!
//! Renders a PyTorch/MONAI script skeleton from a configuration payload.
//! Placeholder until real template rendering lands; the shape of the output
//! (model type and hyperparameters as comments at the top) is what the
//! front-end previews.

use serde_json::{json, Value};

const FALLBACK_MODEL_TYPE: &str = "UnknownModel";

/// Render a training script from a configuration payload. Unknown or missing
/// fields fall back rather than fail: this endpoint previews, it does not
/// validate.
pub fn generate_training_script(config: &Value) -> String {
    let model_type = config
        .get("model_type")
        .and_then(Value::as_str)
        .unwrap_or(FALLBACK_MODEL_TYPE);
    let hyperparameters = config
        .get("hyperparameters")
        .cloned()
        .unwrap_or_else(|| json!({}));

    format!(
        "import torch\n\n# Model type: {model_type}\n# Hyperparameters: {hyperparameters}\n\n# ... rest of the script ...\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_contains_model_and_hyperparameters() {
        let config = json!({
            "model_type": "UNet",
            "hyperparameters": {"epochs": 5, "lr": 0.001}
        });

        let script = generate_training_script(&config);

        assert!(script.starts_with("import torch"));
        assert!(script.contains("UNet"));
        assert!(script.contains("epochs"));
        assert!(script.contains("0.001"));
    }

    #[test]
    fn test_missing_model_type_falls_back() {
        let script = generate_training_script(&json!({"hyperparameters": {"epochs": 10}}));
        assert!(script.contains("UnknownModel"));
    }

    #[test]
    fn test_empty_config() {
        let script = generate_training_script(&json!({}));
        assert!(script.contains("UnknownModel"));
        assert!(script.contains("Hyperparameters: {}"));
    }
}
