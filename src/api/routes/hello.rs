//! Smoke-test endpoint

use serde::Serialize;

use crate::api::types::Json;

#[derive(Debug, Clone, Serialize)]
pub struct HelloResponse {
    pub message: String,
}

/// GET /api/hello
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from DeepBuilder!".to_string(),
    })
}
