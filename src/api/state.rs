//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::explanation::ExplanationProvider;
use crate::infrastructure::progress::ProgressTracker;
use crate::infrastructure::store::ConfigStore;
use crate::infrastructure::upload::UploadService;

/// Shared services, constructed once at startup and injected into the
/// router. The config store in particular is deliberately not a module-level
/// singleton: this state owns the single instance for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub config_store: Arc<ConfigStore>,
    pub uploads: Arc<UploadService>,
    pub progress: Arc<ProgressTracker>,
    pub explanations: Arc<dyn ExplanationProvider>,
}

impl AppState {
    pub fn new(
        config_store: Arc<ConfigStore>,
        uploads: Arc<UploadService>,
        progress: Arc<ProgressTracker>,
        explanations: Arc<dyn ExplanationProvider>,
    ) -> Self {
        Self {
            config_store,
            uploads,
            progress,
            explanations,
        }
    }
}
