//! The cart store injected at the application root.
//!
//! SYSTEM CONTEXT
//! ==============
//! UI collaborators mutate the cart only through [`CartStore`] and read its
//! derived aggregates. The store routes every mutation through the pure
//! reducer, then decides whether to write through to storage based on its
//! [`SyncPhase`].
//!
//! HYDRATION
//! =========
//! A new store is empty and has not read storage, so the first render matches
//! a server render. The caller invokes [`CartStore::hydrate`] once it is safe
//! (after mount); later calls are no-ops. Mutations made before hydration stay
//! in memory and are merged on top of the restored cart.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::item::{CartItem, CartState};
use crate::persistence::PersistenceBridge;
use crate::reducer::{self, CartAction};
use crate::storage::CartStorage;

/// Synchronization between the in-memory cart and durable storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncPhase {
    /// Storage has not been read yet; mutations are not persisted.
    #[default]
    Bootstrapping,
    /// Storage has been read once and merged in.
    Hydrated,
    /// Storage has been written since hydration began, by a mutation or by
    /// saving pre-hydration lines merged into the stored cart.
    Steady,
}

/// Cart state plus its persistence bridge.
#[derive(Clone, Debug)]
pub struct CartStore<S> {
    state: CartState,
    bridge: PersistenceBridge<S>,
    phase: SyncPhase,
}

impl<S: CartStorage> CartStore<S> {
    /// Empty store over `storage` at the default key.
    pub fn new(storage: S) -> Self {
        Self::with_bridge(PersistenceBridge::new(storage))
    }

    pub fn with_bridge(bridge: PersistenceBridge<S>) -> Self {
        Self { state: CartState::empty(), bridge, phase: SyncPhase::Bootstrapping }
    }

    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.state.items()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.state.total()
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    #[must_use]
    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Reconcile with storage. Runs at most once per store; returns `true`
    /// only for the call that performed it.
    pub fn hydrate(&mut self) -> bool {
        if self.phase != SyncPhase::Bootstrapping {
            return false;
        }
        self.phase = SyncPhase::Hydrated;

        let Some(restored) = self.bridge.load() else {
            log::debug!("cart hydrated with nothing stored");
            if !self.state.is_empty() {
                self.write_through();
            }
            return true;
        };

        if self.state.is_empty() {
            log::debug!("cart hydrated with {} stored lines", restored.items().len());
            self.state = restored;
        } else {
            let pending = std::mem::take(&mut self.state).into_items();
            log::debug!("cart hydrated, merging {} pre-hydration lines", pending.len());
            self.state = reducer::merge(restored, pending);
            self.write_through();
        }
        true
    }

    pub fn add_item(&mut self, item: CartItem) {
        self.dispatch(CartAction::Add(item));
    }

    pub fn remove_item(&mut self, id: &str) {
        self.dispatch(CartAction::Remove(id.to_owned()));
    }

    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity { id: id.to_owned(), quantity });
    }

    /// Empty the cart and purge storage. The empty state is not saved.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Apply `action`, then persist or purge as the phase requires.
    pub fn dispatch(&mut self, action: CartAction) {
        let next = reducer::reduce(&self.state, &action);
        if matches!(action, CartAction::Clear) {
            self.state = next;
            self.bridge.purge();
            return;
        }
        if next == self.state {
            return;
        }
        self.state = next;
        if self.phase != SyncPhase::Bootstrapping {
            self.write_through();
        }
    }

    fn write_through(&mut self) {
        self.bridge.save(&self.state);
        self.phase = SyncPhase::Steady;
    }
}
