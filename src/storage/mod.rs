//! Persistence gateway.
//!
//! A narrow string key/value interface the quiz engines save their state
//! through. `FileStore` mirrors a `HashMap` to a single JSON file on disk;
//! `MemoryStore` backs tests and throwaway runs.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key for the persisted practice-run bundle (`{questions, idx, stats}`).
pub const PRACTICE_STATE_KEY: &str = "practice_state_v1";

/// Key for the last timed-quiz percentage, stored as a bare number.
pub const LAST_SCORE_KEY: &str = "last_quiz_score";

/// String key/value storage consumed by the quiz engines.
///
/// Writes are fire-and-forget: `set` never reports failure and the engines
/// never retry. A failed write leaves the previous on-disk snapshot in place,
/// and the next mutation rewrites the whole map.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// File-backed store: one JSON object per file, loaded whole at open.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing, unreadable, or corrupt file
    /// loads as an empty map; it will be overwritten on the next `set`.
    pub fn open(path: PathBuf) -> Self {
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        Self { path, entries }
    }

    fn flush(&self) {
        if let Ok(content) = serde_json::to_string(&self.entries) {
            let _ = fs::write(&self.path, content);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        self.flush();
    }
}

/// In-memory store with no durability. Used by tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}
