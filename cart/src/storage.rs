//! Key-value storage port used by the persistence bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser adapter (`localStorage`) lives in the `client` crate behind
//! its `hydrate` feature. [`MemoryStorage`] backs tests and any host without
//! durable storage.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Failure reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable in this environment (SSR, disabled storage).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused to store more data.
    #[error("storage quota exceeded")]
    QuotaExceeded,
    /// Any other backend failure, with its message.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A string-keyed slot store such as browser `localStorage`.
pub trait CartStorage {
    /// Read the raw value under `key`. `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Clones share the same slots.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`, bypassing the [`CartStorage`] error path.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match self.with_slots(|slots| slots.get(key).cloned()) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("memory storage read of {key:?} failed: {err}");
                None
            }
        }
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.with_slots(|slots| slots.len()) {
            Ok(len) => len,
            Err(err) => {
                log::warn!("memory storage length unavailable: {err}");
                0
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_slots<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> Result<T, StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::Backend(format!("memory storage lock poisoned: {e}")))?;
        Ok(f(&mut slots))
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_slots(|slots| slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_slots(|slots| {
            slots.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_slots(|slots| {
            slots.remove(key);
        })
    }
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
