//! File-backed session store
//!
//! Entries live in one JSON object (`{"key": "value", ...}`) that is
//! rewritten atomically-enough for a single-user tool on every mutation.
//! A missing file is an empty store; `clear` removes every entry, mirroring
//! a wholesale local-storage clear.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use navshell_core::ports::ISessionStore;

use crate::StoreError;

/// Session store persisted as a JSON file
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Opens the store at `path`, loading existing entries if the file
    /// exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|err| StoreError::Corrupt(err.to_string()))?
        } else {
            HashMap::new()
        };
        debug!(path = %path.display(), "session store opened");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Returns the default store file path
    ///
    /// Typically `~/.local/share/navshell/session.json` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("navshell")
            .join("session.json")
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current entries back to disk
    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)
            .map_err(|err| StoreError::Corrupt(err.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[async_trait]
impl ISessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        entries.clear();
        self.persist(&entries)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FileSessionStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSessionStore::open(dir.path().join("session.json")).expect("open");
        (dir, store)
    }

    #[tokio::test]
    async fn test_set_get_roundtrip() {
        let (_dir, store) = temp_store();
        store.set("isLoggedIn", "true").await.unwrap();
        assert_eq!(
            store.get("isLoggedIn").await.unwrap(),
            Some("true".to_string())
        );
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = FileSessionStore::open(&path).unwrap();
            store.set("isLoggedIn", "true").await.unwrap();
            store.set("theme", "dark").await.unwrap();
        }

        let store = FileSessionStore::open(&path).unwrap();
        assert_eq!(
            store.get("isLoggedIn").await.unwrap(),
            Some("true".to_string())
        );
        assert_eq!(store.get("theme").await.unwrap(), Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path).unwrap();
        store.set("isLoggedIn", "true").await.unwrap();
        store.set("theme", "dark").await.unwrap();

        store.clear().await.unwrap();
        assert_eq!(store.get("isLoggedIn").await.unwrap(), None);

        // The clear is persistent, not just in-memory.
        let reopened = FileSessionStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_single_key() {
        let (_dir, store) = temp_store();
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();

        store.remove("a").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
        assert_eq!(store.get("b").await.unwrap(), Some("2".to_string()));
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().join("nope.json")).unwrap();
        assert_eq!(store.get("isLoggedIn").await.unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            FileSessionStore::open(&path),
            Err(StoreError::Corrupt(_))
        ));
    }
}
