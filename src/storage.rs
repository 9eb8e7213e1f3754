// SPDX-License-Identifier: MPL-2.0
//! Local key-value store backed by a JSON file.
//!
//! Behaves like browser local storage: string keys map to string values and
//! every write rewrites the whole file synchronously. Values that hold
//! structured data are JSON-encoded by their owner.
//!
//! # Path Resolution
//!
//! The file lives at `storage.json` in the application data directory:
//! 1. Explicit `base_dir` passed to [`LocalStorage::open`]
//! 2. `--data-dir` CLI argument
//! 3. `TCG_MARKET_DATA_DIR` environment variable
//! 4. Platform-specific data directory

use crate::app::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Clone, PartialEq)]
pub struct LocalStorage {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Opens the store in `base_dir`, or in the resolved data directory.
    ///
    /// A missing file is an empty store. When no data directory can be
    /// resolved at all the store still works but never touches disk.
    pub fn open(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = Self::file_path(base_dir);

        let entries = match &path {
            Some(path) => read_entries(path)?,
            None => {
                tracing::warn!("no data directory available; local storage is memory-only");
                BTreeMap::new()
            }
        };

        Ok(Self { path, entries })
    }

    /// Resolves the backing file path without reading it.
    #[must_use]
    pub fn file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::AppDir::Data.resolve(base_dir).map(|mut dir| {
            dir.push(STORAGE_FILE);
            dir
        })
    }

    /// An empty store that will write to `path` on the next change.
    #[must_use]
    pub fn empty_at(path: Option<PathBuf>) -> Self {
        Self {
            path,
            entries: BTreeMap::new(),
        }
    }

    /// Location of the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores `value` under `key` and flushes the file.
    ///
    /// The in-memory entry is updated even when the flush fails.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    /// Removes `key` and flushes the file. Removing a missing key is a no-op.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()
        } else {
            Ok(())
        }
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("{}: {e}", parent.display())))?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, content).map_err(|e| Error::Storage(format!("{}: {e}", path.display())))
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content =
        fs::read_to_string(path).map_err(|e| Error::Storage(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Storage(format!("{} is not a string map: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_opens_empty() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = LocalStorage::open(Some(temp_dir.path().to_path_buf())).expect("open");

        assert_eq!(storage.get("favorites"), None);
        assert_eq!(
            storage.path(),
            Some(temp_dir.path().join("storage.json").as_path())
        );
    }

    #[test]
    fn set_persists_across_reopen() {
        let temp_dir = tempdir().expect("create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let mut storage = LocalStorage::open(base.clone()).expect("open");
        storage.set("favorites", "[\"xy1-1\"]".to_string()).expect("set");
        storage.set("other", "value".to_string()).expect("set");

        let reopened = LocalStorage::open(base).expect("reopen");
        assert_eq!(reopened.get("favorites"), Some("[\"xy1-1\"]"));
        assert_eq!(reopened.get("other"), Some("value"));
    }

    #[test]
    fn remove_deletes_key_on_disk() {
        let temp_dir = tempdir().expect("create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let mut storage = LocalStorage::open(base.clone()).expect("open");
        storage.set("favorites", "[]".to_string()).expect("set");
        storage.remove("favorites").expect("remove");
        storage.remove("never-set").expect("removing a missing key is fine");

        let reopened = LocalStorage::open(base).expect("reopen");
        assert_eq!(reopened.get("favorites"), None);
    }

    #[test]
    fn corrupted_file_is_a_storage_error() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join("storage.json"), "{not json").expect("write");

        let result = LocalStorage::open(Some(temp_dir.path().to_path_buf()));
        assert!(matches!(result, Err(Error::Storage(_))));
    }

    #[test]
    fn non_string_values_are_rejected() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join("storage.json"), r#"{"favorites": [1, 2]}"#)
            .expect("write");

        let result = LocalStorage::open(Some(temp_dir.path().to_path_buf()));
        assert!(matches!(result, Err(Error::Storage(_))));
    }

    #[test]
    fn set_creates_missing_data_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("a").join("b");

        let mut storage = LocalStorage::open(Some(nested.clone())).expect("open");
        storage.set("k", "v".to_string()).expect("set");

        assert!(nested.join("storage.json").exists());
    }

    #[test]
    fn memory_only_store_never_fails() {
        let mut storage = LocalStorage::empty_at(None);
        storage.set("k", "v".to_string()).expect("set");
        assert_eq!(storage.get("k"), Some("v"));
    }
}
