//! Key/value storage behind the [`crate::Session`].
//!
//! The browser exposes `sessionStorage` as a synchronous string map, so the
//! trait is synchronous as well. Implementations live in sibling modules
//! ([`crate::memory`], and `crate::browser` on the web platform).

/// String key/value storage that survives page reloads on the web platform.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
