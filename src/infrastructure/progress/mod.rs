//! Shared training-progress tracker

use std::sync::{PoisonError, RwLock};

use crate::domain::TrainingProgress;

/// Process-wide record of the current training run.
///
/// Constructed once at startup and injected; no trainer updates it yet, so
/// snapshots report the zeroed default until `record` is called.
pub struct ProgressTracker {
    current: RwLock<TrainingProgress>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(TrainingProgress::default()),
        }
    }

    pub fn snapshot(&self) -> TrainingProgress {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn record(&self, progress: TrainingProgress) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = progress;
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_starts_at_default() {
        let tracker = ProgressTracker::new();
        let progress = tracker.snapshot();

        assert_eq!(progress.current_epoch, 0);
        assert_eq!(progress.total_epochs, 0);
        assert!(progress.loss.is_none());
    }

    #[test]
    fn test_record_replaces_snapshot() {
        let tracker = ProgressTracker::new();
        tracker.record(TrainingProgress {
            current_epoch: 3,
            total_epochs: 10,
            loss: Some(0.42),
        });

        let progress = tracker.snapshot();
        assert_eq!(progress.current_epoch, 3);
        assert_eq!(progress.loss, Some(0.42));
    }
}
