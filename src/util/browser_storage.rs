//! `localStorage` backend for the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential store persists through `KeyValueStorage`; this is the
//! browser implementation. The `Storage` handle is looked up on every call
//! because web-sys handles are not `Send`, and context values must be.

use console_core::util::storage::{KeyValueStorage, StorageError};

/// Window `localStorage`. Native builds behave as an empty, read-only store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            storage
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable("no browser window".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError::Unavailable("localStorage is not accessible".to_owned()))
}
