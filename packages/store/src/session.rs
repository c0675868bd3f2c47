//! # Session — bearer token and signed-in user
//!
//! [`Session`] is the one place that knows where the credentials live. It is
//! created once at startup with [`Session::restore`], cloned into whoever needs it
//! (the API client, the UI context), and torn down with [`Session::clear`] on
//! logout or when the backend rejects the token.
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] | Bearer token returned by the login endpoint |
//! | [`USER_ID_KEY`] | Login id of the signed-in user |

use std::fmt;
use std::sync::Arc;

use crate::storage::SessionStorage;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the login id of the signed-in user.
pub const USER_ID_KEY: &str = "userId";

/// Handle to the persisted session. Clones share the same storage.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn SessionStorage>,
}

impl Session {
    /// Open the session persisted in `storage`, if any.
    pub fn restore(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    pub fn user_id(&self) -> Option<String> {
        self.read(USER_ID_KEY)
    }

    /// Whether a bearer token is available.
    pub fn is_active(&self) -> bool {
        self.token().is_some()
    }

    /// Record a successful login.
    pub fn begin(&self, token: &str, user_id: &str) {
        self.storage.set(TOKEN_KEY, token);
        self.storage.set(USER_ID_KEY, user_id);
    }

    /// Forget the token and the user.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_ID_KEY);
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|value| !value.is_empty())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("active", &self.is_active())
            .field("user_id", &self.user_id())
            .finish()
    }
}
