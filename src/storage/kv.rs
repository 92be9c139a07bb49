//! Key-value persistence
//!
//! The ledger persists through a small string-keyed, string-valued store with
//! get/set/remove semantics. `FileStore` keeps the whole map in one JSON file
//! and rewrites it atomically on every change; `MemoryStore` backs tests and
//! embedders that handle persistence themselves.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PennywiseResult;

use super::file_io::{read_json, remove_file_if_exists, write_json_atomic};

/// Keys used in the store
pub mod keys {
    pub const USERNAME: &str = "username";
    pub const TRANSACTIONS: &str = "transactions";
    pub const BUDGETS: &str = "budgets";
    pub const THEME: &str = "theme";
    pub const CURRENCY: &str = "currency";
    pub const DATE_FILTER: &str = "dateFilter";
    pub const LAST_DELETED: &str = "lastDeleted";

    /// Every key Pennywise writes
    pub const ALL: [&str; 7] = [
        USERNAME,
        TRANSACTIONS,
        BUDGETS,
        THEME,
        CURRENCY,
        DATE_FILTER,
        LAST_DELETED,
    ];
}

/// Opaque string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> PennywiseResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> PennywiseResult<()>;
    fn remove(&mut self, key: &str) -> PennywiseResult<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PennywiseResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PennywiseResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PennywiseResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> PennywiseResult<Self> {
        let path = path.into();
        let entries: BTreeMap<String, String> = read_json(&path)?;
        debug!(path = %path.display(), keys = entries.len(), "opened store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the backing file entirely
    pub fn destroy(self) -> PennywiseResult<bool> {
        remove_file_if_exists(&self.path)
    }

    fn flush(&self) -> PennywiseResult<()> {
        write_json_atomic(&self.path, &self.entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PennywiseResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PennywiseResult<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Keep memory consistent with what is on disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PennywiseResult<()> {
        if let Some(previous) = self.entries.remove(key) {
            if let Err(e) = self.flush() {
                self.entries.insert(key.to_string(), previous);
                return Err(e);
            }
            debug!(key, "removed value");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(keys::USERNAME).unwrap(), None);

        store.set(keys::USERNAME, "alice").unwrap();
        assert_eq!(store.get(keys::USERNAME).unwrap().as_deref(), Some("alice"));

        store.remove(keys::USERNAME).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(keys::THEME, "dark").unwrap();
        store.set(keys::CURRENCY, "EUR").unwrap();
        store.remove(keys::CURRENCY).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(keys::THEME).unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get(keys::CURRENCY).unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(store.get(keys::TRANSACTIONS).unwrap(), None);
    }

    #[test]
    fn test_file_store_corrupt_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_destroy_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        let mut store = FileStore::open(&path).unwrap();
        store.set(keys::USERNAME, "alice").unwrap();

        assert!(store.destroy().unwrap());
        assert!(!path.exists());
    }
}
