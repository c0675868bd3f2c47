//! # Browser session storage
//!
//! [`BrowserStorage`] is the [`SessionStorage`] implementation used on the **web
//! platform**. It writes into `window.sessionStorage`, so the session survives a
//! reload but ends with the tab.
//!
//! The struct is zero-sized and looks the storage object up on every call, which
//! keeps it `Send + Sync` even though `web_sys::Storage` is not.
//!
//! All failures (no window, storage disabled, quota errors) are swallowed: reads
//! return `None` and writes do nothing. A broken storage therefore behaves like a
//! signed-out browser rather than crashing the app.

use crate::storage::SessionStorage;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
