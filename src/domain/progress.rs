//! Training progress reporting

use serde::{Deserialize, Serialize};

/// Snapshot of the current training run.
///
/// No trainer is wired up yet, so the tracker reports the zeroed default
/// until something records progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingProgress {
    pub current_epoch: u32,
    pub total_epochs: u32,
    pub loss: Option<f64>,
}

impl Default for TrainingProgress {
    fn default() -> Self {
        Self {
            current_epoch: 0,
            total_epochs: 0,
            loss: None,
        }
    }
}
