//! History store over a pluggable key-value backend
//!
//! The backend mirrors a browser's local storage: string keys to string
//! values, synchronous, small payloads. An in-memory implementation serves
//! tests and ephemeral sessions; the file-backed one persists across runs.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use super::types::{HistoryEntry, HistoryError, HISTORY_KEY, MAX_HISTORY_ENTRIES};

// ============================================================================
// Key-Value Backend
// ============================================================================

/// Minimal string key-value storage
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<(), HistoryError>;

    /// Delete a key; absent keys are fine
    fn remove(&self, key: &str) -> Result<(), HistoryError>;
}

/// Ephemeral in-memory backend
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HistoryError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), HistoryError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// File-backed backend; each key maps to `<dir>/<key>.json`
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at a directory, created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HistoryError::Storage(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HistoryError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| HistoryError::Storage(e.to_string()))?;
        std::fs::write(self.path_for(key), value).map_err(|e| HistoryError::Storage(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), HistoryError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HistoryError::Storage(e.to_string())),
        }
    }
}

// ============================================================================
// History Store
// ============================================================================

/// Capped upload-history list persisted under `HISTORY_KEY`
///
/// The backend is injected, never a process-wide singleton, so callers own
/// where the history lives and tests substitute empty stores.
pub struct HistoryStore {
    store: Box<dyn KeyValueStore>,
}

impl HistoryStore {
    /// History over an injected backend
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current entries, newest first
    ///
    /// A missing or corrupt persisted blob reads as an empty history; a
    /// corrupt one is logged and will be overwritten on the next record.
    pub fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding corrupt upload history");
                Ok(Vec::new())
            }
        }
    }

    /// Prepend an entry, trimming the list to capacity, and persist
    pub fn record(&self, entry: HistoryEntry) -> Result<Vec<HistoryEntry>, HistoryError> {
        let mut entries = self.entries()?;
        entries.insert(0, entry);
        entries.truncate(MAX_HISTORY_ENTRIES);

        let raw = serde_json::to_string(&entries)?;
        self.store.set(HISTORY_KEY, &raw)?;
        Ok(entries)
    }

    /// Forget every entry, removing the persisted key
    pub fn clear(&self) -> Result<(), HistoryError> {
        self.store.remove(HISTORY_KEY)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> HistoryEntry {
        HistoryEntry::new(name, "alpha", Some(3))
    }

    #[test]
    fn test_empty_history() {
        let history = HistoryStore::new(Box::new(MemoryStore::new()));
        assert!(history.entries().unwrap().is_empty());
    }

    #[test]
    fn test_record_prepends() {
        let history = HistoryStore::new(Box::new(MemoryStore::new()));

        history.record(entry("first.pdf")).unwrap();
        let entries = history.record(entry("second.pdf")).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].file_name, "second.pdf");
        assert_eq!(entries[1].file_name, "first.pdf");
    }

    #[test]
    fn test_capacity_cap() {
        let history = HistoryStore::new(Box::new(MemoryStore::new()));

        for i in 0..12 {
            history.record(entry(&format!("doc-{i}.pdf"))).unwrap();
        }

        let entries = history.entries().unwrap();
        assert_eq!(entries.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(entries[0].file_name, "doc-11.pdf");
        // The two oldest fell off
        assert!(entries.iter().all(|e| e.file_name != "doc-0.pdf"));
        assert!(entries.iter().all(|e| e.file_name != "doc-1.pdf"));
    }

    #[test]
    fn test_clear_removes_key() {
        let store = MemoryStore::new();
        let history = HistoryStore::new(Box::new(store));

        history.record(entry("doc.pdf")).unwrap();
        history.clear().unwrap();

        assert!(history.entries().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_blob_reads_empty() {
        let store = MemoryStore::new();
        store.set(HISTORY_KEY, "not json {").unwrap();
        let history = HistoryStore::new(Box::new(store));

        assert!(history.entries().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let history = HistoryStore::new(Box::new(FileStore::new(dir.path())));

        history.record(entry("persisted.pdf")).unwrap();

        // A fresh store over the same directory sees the data
        let reopened = HistoryStore::new(Box::new(FileStore::new(dir.path())));
        let entries = reopened.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name, "persisted.pdf");
        assert_eq!(entries[0].total_matches, Some(3));

        reopened.clear().unwrap();
        assert!(reopened.entries().unwrap().is_empty());
    }

    #[test]
    fn test_persisted_shape_is_camel_case() {
        let store = MemoryStore::new();
        let history = HistoryStore::new(Box::new(store));
        history.record(entry("doc.pdf")).unwrap();

        let raw = history.store.get(HISTORY_KEY).unwrap().unwrap();
        assert!(raw.contains("\"fileName\""));
        assert!(raw.contains("\"searchText\""));
        assert!(raw.contains("\"totalMatches\""));
    }
}
