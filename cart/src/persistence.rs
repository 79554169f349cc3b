//! Best-effort durability of the cart in a single storage slot.
//!
//! DESIGN
//! ======
//! The slot holds `{ "items": [...], "total": n, "itemCount": n }` with no
//! version field. On decode `items` is authoritative: aggregates are always
//! recomputed, and stored ones only feed a debug log when they disagree.
//!
//! Every `try_*` method reports failures; the plain `save`/`load`/`purge`
//! wrappers log them and carry on so callers never see a storage error.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Deserialize;

use crate::item::{CartItem, CartItemError, CartState};
use crate::reducer;
use crate::storage::{CartStorage, StorageError};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

const AGGREGATE_EPSILON: f64 = 1e-9;

/// Failure while moving cart state in or out of storage.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode cart: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("stored cart holds an invalid line: {0}")]
    InvalidItem(#[from] CartItemError),
}

/// Wire shape read back from storage. Aggregates are optional so documents
/// missing them still restore.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCart {
    items: Vec<CartItem>,
    #[serde(default)]
    total: Option<f64>,
    #[serde(default)]
    item_count: Option<u64>,
}

/// Encode `state` as the storage document.
///
/// # Errors
///
/// Returns [`PersistenceError::Encode`] if serialization fails.
pub fn encode(state: &CartState) -> Result<String, PersistenceError> {
    serde_json::to_string(state).map_err(PersistenceError::Encode)
}

/// Decode a storage document into a state with recomputed aggregates.
///
/// Zero-quantity lines are dropped and repeated ids are merged with add
/// semantics. A line with an empty id or a negative or non-finite price
/// rejects the whole document.
///
/// # Errors
///
/// Returns [`PersistenceError::Decode`] for malformed JSON or an incompatible
/// shape and [`PersistenceError::InvalidItem`] for an unusable line.
pub fn decode(raw: &str) -> Result<CartState, PersistenceError> {
    let stored: StoredCart = serde_json::from_str(raw).map_err(PersistenceError::Decode)?;
    for item in stored.items.iter().filter(|item| item.quantity > 0) {
        item.validate()?;
    }

    let state = reducer::merge(CartState::empty(), stored.items);

    if let Some(total) = stored.total {
        if (total - state.total()).abs() > AGGREGATE_EPSILON {
            log::debug!("stored cart total {total} disagrees with lines; using {}", state.total());
        }
    }
    if let Some(item_count) = stored.item_count {
        if item_count != state.item_count() {
            log::debug!(
                "stored cart itemCount {item_count} disagrees with lines; using {}",
                state.item_count()
            );
        }
    }
    Ok(state)
}

/// Bridge between [`CartState`] and one durable storage key.
#[derive(Clone, Debug)]
pub struct PersistenceBridge<S> {
    storage: S,
    key: String,
}

impl<S: CartStorage> PersistenceBridge<S> {
    /// Bridge over `storage` using [`DEFAULT_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write `state` to the slot.
    ///
    /// # Errors
    ///
    /// Returns encode or storage failures.
    pub fn try_save(&self, state: &CartState) -> Result<(), PersistenceError> {
        let raw = encode(state)?;
        self.storage.write(&self.key, &raw)?;
        Ok(())
    }

    /// Read the slot. `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns storage, decode, or invalid-line failures.
    pub fn try_load(&self) -> Result<Option<CartState>, PersistenceError> {
        match self.storage.read(&self.key)? {
            Some(raw) => decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Delete the slot.
    ///
    /// # Errors
    ///
    /// Returns storage failures.
    pub fn try_purge(&self) -> Result<(), PersistenceError> {
        self.storage.remove(&self.key)?;
        Ok(())
    }

    /// Save `state`, logging and absorbing any failure.
    pub fn save(&self, state: &CartState) {
        if let Err(e) = self.try_save(state) {
            log::warn!("cart save to '{}' failed: {e}", self.key);
        }
    }

    /// Load the stored cart. Absent, unreadable and malformed slots all
    /// yield `None`.
    pub fn load(&self) -> Option<CartState> {
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                log::warn!("cart load from '{}' failed, treating as empty: {e}", self.key);
                None
            }
        }
    }

    /// Remove the stored cart, logging and absorbing any failure.
    pub fn purge(&self) {
        if let Err(e) = self.try_purge() {
            log::warn!("cart purge of '{}' failed: {e}", self.key);
        }
    }
}
