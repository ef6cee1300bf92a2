//! Local key-value storage for persisted dashboard state.
//!
//! `FileStore` keeps one `<key>.json` file per key under a directory;
//! `MemoryStore` backs tests and ephemeral sessions.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// A string-valued key-value store.
pub trait KeyValueStore {
    /// Read the value under `key`; `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Directory-backed store: key `k` lives in `<dir>/k.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, value).map_err(|source| StorageError::Write { path, source })
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.get("layouts").unwrap().is_none());
        store.set("layouts", "{}").unwrap();
        assert_eq!(store.get("layouts").unwrap().as_deref(), Some("{}"));
        store.set("layouts", "[]").unwrap();
        assert_eq!(store.get("layouts").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("nothing").unwrap().is_none());
    }

    #[test]
    fn file_store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("marketdash"));
        store.set("layouts", "{\"lg\":[]}").unwrap();
        assert!(store.path_for("layouts").exists());
        assert_eq!(store.get("layouts").unwrap().as_deref(), Some("{\"lg\":[]}"));
    }
}
