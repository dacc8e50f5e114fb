//! File-based key-value storage
//!
//! Stores each key as one file under a root directory, so persisted state
//! survives process restarts.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::KeyValueStorage;
use crate::{Error, Result};

/// Directory-backed storage, one file per key
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at the given directory
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a key to its backing file path
    ///
    /// Keys are restricted to simple names so they can never escape the
    /// root directory.
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::Storage(format!("Invalid storage key: {}", key)));
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.root)?;

        // Write through a temp file so a crashed write never truncates the key
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        debug!(key, path = %path.display(), "Wrote storage key");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStore;
    use tempfile::tempdir;

    #[test]
    fn test_get_missing_key() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.get("tasks").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.set("counter", "3").unwrap();
        assert_eq!(storage.get("counter").unwrap(), Some("3".to_string()));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut storage = FileStorage::new(dir.path());
            storage.set("counter", "42").unwrap();
        }
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get("counter").unwrap(), Some("42".to_string()));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        assert!(storage.set("../escape", "x").is_err());
        assert!(storage.get("a/b").is_err());
        assert!(storage.set("", "x").is_err());
    }

    #[test]
    fn test_creates_missing_root_on_write() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("state").join("todo");
        let mut storage = FileStorage::new(&nested);
        storage.set("tasks", "[]").unwrap();
        assert!(nested.join("tasks").exists());
    }

    #[test]
    fn test_store_state_survives_restart() {
        let dir = tempdir().unwrap();

        // First session: add tasks and complete one
        {
            let mut store = TaskStore::load(FileStorage::new(dir.path())).unwrap();
            store.add("buy milk").unwrap();
            store.add("write report").unwrap();
            store.toggle(1).unwrap();
        }

        // Second session over the same directory sees the same state
        let store = TaskStore::load(FileStorage::new(dir.path())).unwrap();
        assert_eq!(store.tasks().len(), 2);
        assert_eq!(store.tasks()[0].text, "write report");
        assert_eq!(store.tasks()[1].text, "buy milk");
        assert!(store.tasks()[1].completed);
        assert_eq!(store.next_id(), 3);
    }
}
