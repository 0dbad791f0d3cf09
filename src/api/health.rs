//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

use super::state::AppState;

/// Health response with optional component checks
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    };

    (StatusCode::OK, Json(response))
}

/// Liveness probe
pub async fn live_check() -> StatusCode {
    StatusCode::OK
}

/// Readiness check: verifies the store answers and the upload directory is
/// creatable.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let mut checks = Vec::new();
    let mut overall = HealthStatus::Healthy;

    let store_check = HealthCheck {
        name: "config_store".to_string(),
        status: HealthStatus::Healthy,
        message: Some(format!("{} configs stored", state.config_store.len())),
    };
    checks.push(store_check);

    let upload_check = match std::fs::create_dir_all(state.uploads.upload_dir()) {
        Ok(()) => HealthCheck {
            name: "upload_dir".to_string(),
            status: HealthStatus::Healthy,
            message: None,
        },
        Err(error) => {
            overall = HealthStatus::Degraded;
            HealthCheck {
                name: "upload_dir".to_string(),
                status: HealthStatus::Degraded,
                message: Some(error.to_string()),
            }
        }
    };
    checks.push(upload_check);

    let status = match overall {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status: overall,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
    };

    (status, Json(response))
}
