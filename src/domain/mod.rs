//! Core domain types for the DeepBuilder backend

pub mod dataset;
pub mod error;
pub mod model_config;
pub mod progress;

pub use dataset::UploadedAsset;
pub use error::DomainError;
pub use model_config::ModelConfiguration;
pub use progress::TrainingProgress;
