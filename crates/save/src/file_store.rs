//! File-backed key-value store for native builds.
//!
//! All keys live in one JSON object (`{"key": "value", ...}`). The whole file
//! is rewritten on every change with the write-rename pattern, so a crash
//! mid-write leaves the previous file intact.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use garden::storage::{KeyValueStore, StorageError};

/// Writes `data` to `path` atomically: write `{path}.tmp`, `sync_all()`, then
/// rename over `path`. The original file is untouched until the rename.
pub fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)
}

/// Key-value store persisted to a single JSON file.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt file is logged and also treated as empty (it is
    /// replaced on the next write).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<BTreeMap<String, String>>(&text) {
                Ok(entries) => {
                    info!("FileStore: loaded {} key(s) from {}", entries.len(), path.display());
                    entries
                }
                Err(e) => {
                    warn!("FileStore: {} is corrupt, starting empty: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("FileStore: {} does not exist yet", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                warn!("FileStore: could not read {}, starting empty: {e}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StorageError::Encode(e.to_string()))?;
        atomic_write(&self.path, json.as_bytes())?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create a unique temp directory for each test.
    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("garden_file_store_test_{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_atomic_write_replaces_and_cleans_up() {
        let dir = test_dir("atomic");
        let path = dir.join("store.json");
        let tmp = dir.join("store.json.tmp");

        fs::write(&path, b"original").unwrap();
        // Leftover from a crashed write.
        fs::write(&tmp, b"partial garbage").unwrap();

        atomic_write(&path, b"new contents").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new contents");
        assert!(!tmp.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let dir = test_dir("parents");
        let path = dir.join("nested/deep/store.json");
        atomic_write(&path, b"{}").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"{}");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = test_dir("missing");
        let store = FileStore::open(dir.join("nope.json"));
        assert_eq!(store.get("username").unwrap(), None);
        assert!(!store.path().exists(), "opening must not create the file");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = test_dir("reopen");
        let path = dir.join("store.json");

        let mut store = FileStore::open(&path);
        store.set("isLoggedIn", "true").unwrap();
        store.set("username", "rosa").unwrap();
        store.set("gardenHabits", "[]").unwrap();
        store.remove("isLoggedIn").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("isLoggedIn").unwrap(), None);
        assert_eq!(reopened.get("username").unwrap().as_deref(), Some("rosa"));
        assert_eq!(reopened.get("gardenHabits").unwrap().as_deref(), Some("[]"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_is_a_json_object_of_strings() {
        let dir = test_dir("format");
        let path = dir.join("store.json");

        let mut store = FileStore::open(&path);
        store.set("username", "ivy").unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["username"], "ivy");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty_and_replaced() {
        let dir = test_dir("corrupt");
        let path = dir.join("store.json");
        fs::write(&path, b"{ this is not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("username").unwrap(), None);

        store.set("username", "fern").unwrap();
        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("username").unwrap().as_deref(), Some("fern"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_removing_absent_key_does_not_create_file() {
        let dir = test_dir("remove_absent");
        let path = dir.join("store.json");
        let mut store = FileStore::open(&path);
        store.remove("username").unwrap();
        assert!(!path.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
