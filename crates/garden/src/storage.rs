//! Key-value storage abstraction.
//!
//! Everything the app persists goes through [`KeyValueStore`]: string keys,
//! string values, synchronous access. The `save` crate provides the real
//! backends (a JSON file on native, `localStorage` in the browser); this crate
//! only ships [`MemoryStore`], which is the default until a backend is
//! installed and what the tests run against.

use std::collections::BTreeMap;
use std::fmt;

use bevy::prelude::*;

use crate::notifications::NotificationEvent;
use crate::{PersistBaseline, Persisted};

// =============================================================================
// StorageError
// =============================================================================

/// Errors that can occur while reading or writing key-value storage.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error from a file-backed store.
    Io(std::io::Error),
    /// The storage backend is not reachable (no window, storage disabled, ...).
    Unavailable(String),
    /// The backend refused the write because it is full.
    QuotaExceeded,
    /// A value could not be serialized.
    Encode(String),
    /// A stored value could not be parsed into the expected shape.
    Decode(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            StorageError::QuotaExceeded => {
                write!(f, "Storage full: the browser refused to store more data")
            }
            StorageError::Encode(msg) => write!(f, "Encoding error: {msg}"),
            StorageError::Decode(msg) => write!(f, "Decoding error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

// =============================================================================
// KeyValueStore
// =============================================================================

/// Synchronous string key-value storage.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Returns the stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Short backend name for log messages.
    fn backend_name(&self) -> &'static str;
}

/// In-memory store. Contents are lost when the app exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Builder used to pre-populate a store (tests, fixtures).
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
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

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

// =============================================================================
// LocalStorage resource
// =============================================================================

/// The app's single storage handle. Only persistence code and the session
/// touch it; views read the resources restored from it.
#[derive(Resource)]
pub struct LocalStorage {
    store: Box<dyn KeyValueStore>,
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(MemoryStore::default())
    }
}

impl LocalStorage {
    pub fn new(store: impl KeyValueStore) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn KeyValueStore {
        self.store.as_mut()
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.store.get(key)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.set(key, value)
    }

    pub fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key)
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Writes `T` to storage. Registered by `register_persisted` behind a
/// `resource_changed::<T>` run condition; values equal to the baseline are
/// skipped.
pub fn persist_on_change<T: Persisted>(
    value: Res<T>,
    mut baseline: ResMut<PersistBaseline<T>>,
    mut storage: ResMut<LocalStorage>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    let result = value.to_stored().and_then(|raw| {
        if baseline.stored.as_deref() == Some(raw.as_str()) {
            return Ok(());
        }
        storage.set(T::STORAGE_KEY, &raw)?;
        debug!("Persisted {} to {} storage", T::STORAGE_KEY, storage.backend_name());
        baseline.stored = Some(raw);
        Ok(())
    });

    if let Err(e) = result {
        let msg = format!("Could not save {}: {e}", T::STORAGE_KEY);
        error!("{msg}");
        notifications.send(NotificationEvent::warning(msg));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("username").unwrap(), None);

        store.set("username", "rosa").unwrap();
        assert_eq!(store.get("username").unwrap().as_deref(), Some("rosa"));

        store.set("username", "ivy").unwrap();
        assert_eq!(store.get("username").unwrap().as_deref(), Some("ivy"));
        assert_eq!(store.len(), 1);

        store.remove("username").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_remove_absent_is_ok() {
        let mut store = MemoryStore::default();
        assert!(store.remove("missing").is_ok());
    }

    #[test]
    fn test_local_storage_defaults_to_memory() {
        let storage = LocalStorage::default();
        assert_eq!(storage.backend_name(), "memory");
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Decode("expected an array".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("Decoding error"), "got: {msg}");
        assert!(msg.contains("expected an array"), "got: {msg}");

        let quota = format!("{}", StorageError::QuotaExceeded);
        assert!(quota.contains("Storage full"), "got: {quota}");
    }

    #[test]
    fn test_storage_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StorageError = io_err.into();
        assert!(matches!(err, StorageError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
