//! Model configuration submission and listing

use axum::{extract::State, http::StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::ModelConfiguration;

/// Response for an accepted submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmitConfigResponse {
    pub id: u64,
    pub message: String,
}

/// List stored configurations response
#[derive(Debug, Clone, Serialize)]
pub struct ConfigsResponse {
    pub configs: Vec<ModelConfiguration>,
    pub total: usize,
}

/// POST /api/modelconfig
///
/// Classified rejections: 400 for an unparseable body or missing required
/// fields (named in the response), 422 for a non-mapping `hyperparameters`.
pub async fn submit_config(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<SubmitConfigResponse>), ApiError> {
    let config = ModelConfiguration::validate(&payload)?;

    let id = state.config_store.add(config);
    debug!(id, "Model configuration accepted");

    Ok((
        StatusCode::CREATED,
        Json(SubmitConfigResponse {
            id,
            message: "Model configuration saved successfully".to_string(),
        }),
    ))
}

/// GET /api/modelconfig
pub async fn list_configs(State(state): State<AppState>) -> Json<ConfigsResponse> {
    let configs = state.config_store.get_all();
    let total = configs.len();

    Json(ConfigsResponse { configs, total })
}
