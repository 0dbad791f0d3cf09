//! Training-script generation endpoint

use serde::Serialize;
use serde_json::Value;

use crate::api::types::Json;
use crate::infrastructure::script::generate_training_script;

/// Generated script response
#[derive(Debug, Clone, Serialize)]
pub struct GenerateScriptResponse {
    pub script: String,
}

/// POST /api/generate-script
///
/// Previews a training script for a configuration payload. Unlike
/// submission, this endpoint does not validate; missing fields fall back.
pub async fn generate_script(Json(config): Json<Value>) -> Json<GenerateScriptResponse> {
    Json(GenerateScriptResponse {
        script: generate_training_script(&config),
    })
}
