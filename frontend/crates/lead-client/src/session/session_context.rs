//! The one place that knows where the session token lives.

use crate::{
    LEGACY_TOKEN_KEYS, MemorySessionStore, SessionResult, SessionStore, TOKEN_KEY, USER_ID_KEY,
};

use lead_core::AuthResponse;

use std::fmt;
use std::sync::Arc;

use log::{info, warn};

/// Shared handle over a [`SessionStore`].
///
/// Reads the token under the canonical key. Tokens written by older builds
/// under a legacy key are moved to the canonical key on first read.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Context over an empty process-local store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    pub fn token(&self) -> SessionResult<Option<String>> {
        if let Some(token) = self.store.get(TOKEN_KEY)?.filter(|t| !t.is_empty()) {
            return Ok(Some(token));
        }

        for legacy_key in LEGACY_TOKEN_KEYS {
            if let Some(token) = self.store.get(legacy_key)?.filter(|t| !t.is_empty()) {
                info!("Migrating session token from legacy key '{legacy_key}'");
                self.store.set(TOKEN_KEY, &token)?;
                self.store.remove(legacy_key)?;
                return Ok(Some(token));
            }
        }

        Ok(None)
    }

    pub fn user_id(&self) -> SessionResult<Option<String>> {
        self.store.get(USER_ID_KEY)
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }

    /// Store the token and user id from a signup or login response.
    pub fn establish(&self, auth: &AuthResponse) -> SessionResult<()> {
        self.store.set(TOKEN_KEY, &auth.token)?;
        self.store.set(USER_ID_KEY, &auth.user.id)?;
        info!("Session established for user {}", auth.user.id);
        Ok(())
    }

    /// Remove the token (under every key it may live under) and the user id.
    pub fn clear(&self) -> SessionResult<()> {
        self.store.remove(TOKEN_KEY)?;
        for legacy_key in LEGACY_TOKEN_KEYS {
            self.store.remove(legacy_key)?;
        }
        self.store.remove(USER_ID_KEY)?;
        info!("Session cleared");
        Ok(())
    }

    /// Like [`clear`](Self::clear) but only logs on failure.
    pub fn clear_or_warn(&self) {
        if let Err(e) = self.clear() {
            warn!("Failed to clear session: {e}");
        }
    }
}
