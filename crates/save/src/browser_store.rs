//! `window.localStorage` backend for WASM builds.
//!
//! `BrowserStore` holds no JS handles (they are not `Send`); every operation
//! looks the storage object up again.

use garden::storage::{KeyValueStore, StorageError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DomException, Storage};

/// Check whether a JsValue represents a QuotaExceededError.
fn is_quota_exceeded_error(err: &JsValue) -> bool {
    if let Ok(dom_exception) = err.clone().dyn_into::<DomException>() {
        return dom_exception.name() == "QuotaExceededError";
    }
    let s = format!("{:?}", err);
    s.contains("QuotaExceededError") || s.contains("quota")
}

fn local_storage() -> Result<Storage, StorageError> {
    let window =
        web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("localStorage error: {:?}", e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage not available".to_string()))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("getItem({key}) failed: {:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(|e| {
            if is_quota_exceeded_error(&e) {
                StorageError::QuotaExceeded
            } else {
                StorageError::Unavailable(format!("setItem({key}) failed: {:?}", e))
            }
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("removeItem({key}) failed: {:?}", e)))
    }

    fn backend_name(&self) -> &'static str {
        "localStorage"
    }
}
