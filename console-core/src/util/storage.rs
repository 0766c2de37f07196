//! Durable key/value storage used to persist the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build backs this with `localStorage`, the CLI with one JSON
//! file per key, and tests with [`MemoryStorage`]. Values are stored as JSON
//! text so every backend sees the same wire shape.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors produced by storage backends and the JSON helpers.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend is not reachable (no window, no config directory, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write.
    #[error("storage write failed: {0}")]
    Write(String),

    /// A stored value is not valid JSON for the requested type.
    #[error("stored value for {key} is malformed: {message}")]
    Malformed { key: String, message: String },

    /// A value could not be serialized.
    #[error("value for {key} could not be encoded: {message}")]
    Encode { key: String, message: String },
}

/// Minimal string key/value store.
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Load a JSON value stored under `key`.
///
/// # Errors
///
/// Returns an error if the backend fails or the stored text does not decode.
pub fn load_json<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Malformed { key: key.to_owned(), message: e.to_string() })
}

/// Save a JSON value under `key`.
///
/// # Errors
///
/// Returns an error if the value cannot be encoded or the backend rejects it.
pub fn save_json<T: Serialize>(storage: &dyn KeyValueStorage, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Encode { key: key.to_owned(), message: e.to_string() })?;
    storage.set_item(key, &raw)
}

/// Process-local storage. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
