//! Course enrollment cart: state model, reducer, and best-effort persistence.
//!
//! This crate owns the cart semantics shared by the `client` UI and the SSR
//! host. It has no UI or browser dependencies; storage is reached through the
//! [`CartStorage`] port so the browser adapter lives in `client`.
//!
//! ARCHITECTURE
//! ============
//! - [`item`]: `CartItem` and the aggregate root `CartState`.
//! - [`reducer`]: pure `(state, input) -> state` transitions.
//! - [`storage`]: key-value storage port plus an in-memory adapter.
//! - [`persistence`]: JSON document encode/decode over a storage slot.
//! - [`store`]: the injected store object tying state to persistence.

pub mod item;
pub mod persistence;
pub mod reducer;
pub mod storage;
pub mod store;

pub use item::{CartItem, CartItemError, CartState};
pub use persistence::{DEFAULT_STORAGE_KEY, PersistenceBridge, PersistenceError};
pub use reducer::CartAction;
pub use storage::{CartStorage, MemoryStorage, StorageError};
pub use store::{CartStore, SyncPhase};
