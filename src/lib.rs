//! DeepBuilder backend API
//!
//! A small service for assembling medical-imaging training runs:
//! - Model configuration submission with validation and file-backed storage
//! - Dataset upload validation (NumPy, PNG and DICOM files)
//! - Training-script generation and training-progress reporting

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::explanation::ExplanationClient;
use infrastructure::progress::ProgressTracker;
use infrastructure::store::{ConfigStore, LoggingPersistenceObserver};
use infrastructure::upload::UploadService;
use tracing::info;

/// Create the application state with all services initialized.
///
/// The store and upload service are constructed here, once, and handed to the
/// API layer; this process owns the single store instance. Running more than
/// one process over the same backing file is not coordinated and will lose
/// writes.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store = ConfigStore::new(
        &config.storage.config_file,
        Arc::new(LoggingPersistenceObserver),
    );
    store.load_from_file();
    info!(
        path = %config.storage.config_file.display(),
        configs = store.len(),
        "Config store initialized"
    );

    let uploads = UploadService::new(&config.storage.upload_dir);
    let progress = ProgressTracker::new();
    let explanations = ExplanationClient::new();

    Ok(AppState::new(
        Arc::new(store),
        Arc::new(uploads),
        Arc::new(progress),
        Arc::new(explanations),
    ))
}
