//! Session model backed by a persistent storage mirror
//!
//! The in-memory [`AuthState`] is authoritative for the lifetime of the
//! process. Every mutation is mirrored to [`Storage`] on a fire-and-forget
//! basis: a failed write is logged and dropped, and the in-memory change
//! stands regardless. Storage is only read back by [`SessionModel::restore`]
//! when the process starts.

use std::sync::Arc;

use common::error::StorageResult;
use common::storage::{AUTH_TOKEN_KEY, Storage, USER_DATA_KEY};
use tracing::{info, warn};

use crate::models::{AuthState, User};

/// Holder of the current auth token and user record
pub struct SessionModel {
    state: AuthState,
    storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for SessionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionModel")
            .field("authenticated", &self.is_authenticated())
            .field("user", &self.state.user)
            .finish_non_exhaustive()
    }
}

impl SessionModel {
    /// Create an empty session mirrored to `storage`
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            state: AuthState::default(),
            storage,
        }
    }

    /// Create a session seeded from what `storage` holds.
    ///
    /// Unreadable slots, or a user slot that no longer parses, leave the
    /// corresponding value empty.
    pub fn restore(storage: Arc<dyn Storage>) -> Self {
        let token = match storage.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Failed to read persisted token: {}", e);
                None
            }
        };

        let user = match storage.get(USER_DATA_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Ignoring unreadable persisted user: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read persisted user: {}", e);
                None
            }
        };

        info!(
            "Restored session (token: {}, user: {})",
            token.is_some(),
            user.is_some()
        );

        Self {
            state: AuthState { token, user },
            storage,
        }
    }

    /// Current user, if any
    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    /// Snapshot of the whole auth state
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Whether a token is held. Gates the profile screens.
    pub fn is_authenticated(&self) -> bool {
        self.state.token.is_some()
    }

    /// Replace the user record wholesale
    pub fn set_user(&mut self, user: User) {
        self.mirror("store user", |storage| {
            let raw = serde_json::to_string(&user)?;
            storage.set(USER_DATA_KEY, &raw)
        });
        self.state.user = Some(user);
    }

    /// Replace the token. `None` or an empty token also deletes the persisted one.
    pub fn set_token(&mut self, token: Option<String>) {
        let token = token.filter(|t| !t.is_empty());
        match token.as_deref() {
            Some(t) => self.mirror("store token", |storage| storage.set(AUTH_TOKEN_KEY, t)),
            None => self.mirror("remove token", |storage| storage.remove(AUTH_TOKEN_KEY)),
        }
        self.state.token = token;
    }

    /// Reset to the empty state and remove both persisted entries
    pub fn clear(&mut self) {
        self.state = AuthState::default();
        self.mirror("remove token", |storage| storage.remove(AUTH_TOKEN_KEY));
        self.mirror("remove user", |storage| storage.remove(USER_DATA_KEY));
    }

    fn mirror<F>(&self, action: &str, write: F)
    where
        F: FnOnce(&dyn Storage) -> StorageResult<()>,
    {
        if let Err(e) = write(self.storage.as_ref()) {
            warn!("Session storage failed to {}: {}", action, e);
        }
    }
}
