//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`, with an in-memory fallback
//! when the browser refuses storage access.

use todo_core::{DomainError, DomainResult, KeyValueStore, MemoryStore};
use wasm_bindgen::JsValue;

pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        let storage = web_sys::window().map(|w| w.local_storage());
        match storage {
            Some(Ok(Some(storage))) => BrowserStore::Local(storage),
            Some(Err(e)) => {
                log::warn!("[STORAGE] localStorage denied ({:?}), tasks will not survive a reload", e);
                BrowserStore::Memory(MemoryStore::new())
            }
            _ => {
                log::warn!("[STORAGE] localStorage unavailable, tasks will not survive a reload");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

fn js_error(action: &str, key: &str, err: JsValue) -> DomainError {
    DomainError::Storage(format!("{} `{}`: {:?}", action, key, err))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).map_err(|e| js_error("get", key, e)),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        match self {
            BrowserStore::Local(storage) => storage.set_item(key, value).map_err(|e| js_error("set", key, e)),
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        match self {
            BrowserStore::Local(storage) => storage.remove_item(key).map_err(|e| js_error("remove", key, e)),
            BrowserStore::Memory(store) => store.remove(key),
        }
    }
}
