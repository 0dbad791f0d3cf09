//! Training progress endpoint

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::Json;
use crate::domain::TrainingProgress;

/// GET /api/training_progress
pub async fn training_progress(State(state): State<AppState>) -> Json<TrainingProgress> {
    Json(state.progress.snapshot())
}
