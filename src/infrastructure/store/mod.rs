//! File-backed store for accepted model configurations
//!
//! Append-only in memory, with the full sequence rewritten to a JSON file on
//! every insert. The store is a single-process convenience cache, not a
//! database: a multi-process deployment needs an external store and is out of
//! scope here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

use crate::domain::ModelConfiguration;

/// Hook for persistence failures.
///
/// `add` never fails because of I/O; a failed backing-file write is reported
/// here instead so it stays diagnosable without breaking the in-memory
/// append.
pub trait PersistenceObserver: Send + Sync {
    fn on_persist_error(&self, path: &Path, error: &io::Error);
}

/// Default observer: a structured warning log.
pub struct LoggingPersistenceObserver;

impl PersistenceObserver for LoggingPersistenceObserver {
    fn on_persist_error(&self, path: &Path, error: &io::Error) {
        warn!(
            path = %path.display(),
            error = %error,
            "Failed to persist config store; in-memory state is ahead of disk"
        );
    }
}

struct StoreInner {
    configs: Vec<ModelConfiguration>,
    /// Monotonic, generated under the same lock as insertion. Survives the
    /// append-only lifetime; re-derived from sequence length on reload.
    next_id: u64,
}

/// Thread-safe, file-backed store of accepted configurations.
///
/// One mutex serializes mutations and the snapshot read; the file write
/// happens while the lock is held, so concurrent adds cannot interleave
/// writes.
pub struct ConfigStore {
    inner: Mutex<StoreInner>,
    file_path: PathBuf,
    observer: Arc<dyn PersistenceObserver>,
}

impl ConfigStore {
    pub fn new(file_path: impl Into<PathBuf>, observer: Arc<dyn PersistenceObserver>) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                configs: Vec::new(),
                next_id: 0,
            }),
            file_path: file_path.into(),
            observer,
        }
    }

    /// Append a configuration and return its 1-based ID.
    ///
    /// The in-memory append always succeeds; the synchronous file write is
    /// best-effort and a failure is routed to the observer, never to the
    /// caller.
    pub fn add(&self, config: ModelConfiguration) -> u64 {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.configs.push(config);

        if let Err(error) = self.write_to_disk(&inner.configs) {
            self.observer.on_persist_error(&self.file_path, &error);
        }

        id
    }

    /// Snapshot copy of the stored sequence, in insertion order.
    pub fn get_all(&self) -> Vec<ModelConfiguration> {
        self.lock().configs.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().configs.is_empty()
    }

    /// Rebuild state from the backing file.
    ///
    /// A missing file leaves the current state untouched; unreadable or
    /// corrupt content resets the store to empty rather than failing. The ID
    /// counter is re-derived from the loaded length either way.
    pub fn load_from_file(&self) {
        let mut inner = self.lock();

        if !self.file_path.exists() {
            inner.next_id = inner.configs.len() as u64;
            return;
        }

        inner.configs = match fs::read(&self.file_path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| serde_json::from_slice(&bytes).map_err(|e| e.to_string()))
        {
            Ok(configs) => configs,
            Err(error) => {
                warn!(
                    path = %self.file_path.display(),
                    error = %error,
                    "Backing file unreadable or corrupt; resetting store to empty"
                );
                Vec::new()
            }
        };
        inner.next_id = inner.configs.len() as u64;
    }

    /// Panics during an append cannot leave the sequence half-written, so a
    /// poisoned lock is safe to recover.
    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_to_disk(&self, configs: &[ModelConfiguration]) -> io::Result<()> {
        let json = serde_json::to_vec_pretty(configs).map_err(io::Error::other)?;
        fs::write(&self.file_path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    struct CountingObserver(AtomicUsize);

    impl PersistenceObserver for CountingObserver {
        fn on_persist_error(&self, _path: &Path, _error: &io::Error) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn config(model_type: &str) -> ModelConfiguration {
        ModelConfiguration::validate(&json!({
            "model_type": model_type,
            "hyperparameters": {"lr": 0.1}
        }))
        .unwrap()
    }

    fn store_at(path: impl Into<PathBuf>) -> ConfigStore {
        ConfigStore::new(path, Arc::new(LoggingPersistenceObserver))
    }

    #[test]
    fn test_add_and_get_all() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path().join("configs.json"));

        let first = store.add(config("A"));
        let second = store.add(config("B"));

        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let all = store.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].model_type, "A");
        assert_eq!(all[1].model_type, "B");
    }

    #[test]
    fn test_snapshot_is_defensive() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path().join("configs.json"));
        store.add(config("A"));

        let mut snapshot = store.get_all();
        snapshot.clear();

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_round_trip_through_backing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("configs.json");

        let store = store_at(&path);
        store.add(config("C"));

        let reloaded = store_at(&path);
        reloaded.load_from_file();

        let all = reloaded.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], config("C"));
    }

    #[test]
    fn test_ids_keep_increasing_after_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("configs.json");

        let store = store_at(&path);
        store.add(config("A"));
        store.add(config("B"));

        let reloaded = store_at(&path);
        reloaded.load_from_file();
        assert_eq!(reloaded.add(config("C")), 3);
    }

    #[test]
    fn test_missing_file_leaves_state_empty() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path().join("does_not_exist.json"));
        store.load_from_file();
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_file_resets_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("configs.json");
        fs::write(&path, "not a json").unwrap();

        let store = store_at(&path);
        store.load_from_file();

        assert!(store.get_all().is_empty());
        // And the store stays usable afterwards.
        assert_eq!(store.add(config("A")), 1);
    }

    #[test]
    fn test_write_failure_reaches_observer_but_not_caller() {
        let observer = Arc::new(CountingObserver(AtomicUsize::new(0)));
        let store = ConfigStore::new("/nonexistent-dir/configs.json", observer.clone());

        let id = store.add(config("D"));

        assert_eq!(id, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(observer.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_adds_are_serialized() {
        let dir = tempdir().unwrap();
        let store = Arc::new(store_at(dir.path().join("configs.json")));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.add(config(&format!("model-{i}"))))
            })
            .collect();

        let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=8).collect::<Vec<u64>>());
        assert_eq!(store.len(), 8);
    }
}
