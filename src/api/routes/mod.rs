//! `/api` endpoints

pub mod configs;
pub mod explanation;
pub mod hello;
pub mod progress;
pub mod scripts;
pub mod uploads;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create the `/api` router
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello::hello))
        .route(
            "/modelconfig",
            post(configs::submit_config).get(configs::list_configs),
        )
        .route("/upload-dataset", post(uploads::upload_dataset))
        .route("/upload", post(uploads::upload_or_reference))
        .route("/training_progress", get(progress::training_progress))
        .route("/generate-script", post(scripts::generate_script))
        .route("/explanation", get(explanation::explanation))
}
