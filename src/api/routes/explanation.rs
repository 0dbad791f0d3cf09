//! Term explanation endpoint

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::DomainError;

#[derive(Debug, Deserialize)]
pub struct ExplanationQuery {
    term: Option<String>,
}

/// Explanation response
#[derive(Debug, Clone, Serialize)]
pub struct ExplanationResponse {
    pub term: String,
    pub summary: String,
}

/// GET /api/explanation?term=...
pub async fn explanation(
    State(state): State<AppState>,
    Query(query): Query<ExplanationQuery>,
) -> Result<Json<ExplanationResponse>, ApiError> {
    let term = query
        .term
        .filter(|term| !term.is_empty())
        .ok_or_else(|| DomainError::validation("Missing required query parameter: term"))?;

    debug!(term = %term, "Looking up explanation");

    let summary = state
        .explanations
        .summary(&term)
        .await?
        .ok_or_else(|| DomainError::not_found(format!("No summary found for '{term}'")))?;

    Ok(Json(ExplanationResponse { term, summary }))
}
