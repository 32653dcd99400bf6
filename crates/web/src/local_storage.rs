use log::warn;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use watchlist::{KeyValueStore, MemoryStore, Result, WatchlistError};

/// `window.localStorage`, or an in-memory map when the browser refuses
/// storage access (private windows, disabled cookies).
pub struct BrowserStore {
    local: Option<Storage>,
    fallback: MemoryStore,
}

impl BrowserStore {
    pub fn open() -> Self {
        let local = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if local.is_none() {
            warn!("localStorage unavailable, favorites will not outlive this page");
        }
        BrowserStore {
            local,
            fallback: MemoryStore::new(),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match &self.local {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => self.fallback.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        match &self.local {
            Some(storage) => storage.set_item(key, value).map_err(js_error),
            None => self.fallback.set_item(key, value),
        }
    }
}

fn js_error(value: JsValue) -> WatchlistError {
    WatchlistError::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
