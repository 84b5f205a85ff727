//! # `localStorage` key/value store: browser-side session persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through `web-sys`.
//!
//! Like the rest of the session layer it is forgiving: a browser without
//! storage (private mode, sandboxed iframe) behaves as an always-empty store for
//! reads, and reports [`StorageError::Unavailable`] for writes.

use crate::session::{KeyValueStore, StorageError};

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
