use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::AppConfig;

use super::health;
use super::routes;
use super::state::AppState;

/// Create the application router.
///
/// When a static directory is configured, the front-end bundle is served for
/// any path the API does not claim.
pub fn create_router(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Application API
        .nest("/api", routes::create_api_router())
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    if let Some(static_dir) = &config.storage.static_dir {
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router
}
