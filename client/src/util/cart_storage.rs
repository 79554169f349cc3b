//! Browser `localStorage` adapter for the cart persistence port.
//!
//! SYSTEM CONTEXT
//! ==============
//! `cart` talks to storage through `CartStorage`; this adapter is the only
//! place that touches `web_sys::Storage`. Outside the `hydrate` build (SSR,
//! native tests) every call reports `StorageError::Unavailable`, which the
//! persistence bridge logs and absorbs.

#[cfg(test)]
#[path = "cart_storage_test.rs"]
mod cart_storage_test;

use cart::{CartStorage, StorageError};

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl CartStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(js_error(&e)),
    }
}

/// Map a thrown JS value to a storage error. Browsers report a full slot as
/// `QuotaExceededError` and disabled storage as `SecurityError`.
#[cfg(feature = "hydrate")]
fn js_error(value: &wasm_bindgen::JsValue) -> StorageError {
    use wasm_bindgen::JsCast;

    if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
        return match exception.name().as_str() {
            "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED" => StorageError::QuotaExceeded,
            "SecurityError" => StorageError::Unavailable,
            name => StorageError::Backend(format!("{name}: {}", exception.message())),
        };
    }
    StorageError::Backend(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
