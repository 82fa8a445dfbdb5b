//! Durable, observable session cell.
//!
//! The store keeps the current [`Session`] in a `watch` channel so that
//! readers never block and subscribers see every change. Writers go through
//! [`SessionStore::set_auth`] and [`SessionStore::logout`], which update
//! durable storage first and then publish the new value.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use pindrop_domain::{Session, User};
use tokio::sync::watch;

use crate::error::SessionError;
use crate::ports::KeyValueStorage;

/// Storage key of the serialized user record.
pub const USER_KEY: &str = "user";

/// Storage key of the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Thread-safe session store backed by durable key/value storage.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    current: watch::Sender<Option<Session>>,
    /// Serializes writers so storage and memory change together.
    writer: Mutex<()>,
}

impl SessionStore {
    /// Opens the store, restoring any session persisted in `storage`.
    ///
    /// Missing entries yield an unauthenticated store. Unreadable or
    /// half-present entries are treated the same way and removed.
    #[must_use]
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        let restored = restore(storage.as_ref());
        let (current, _) = watch::channel(restored);
        Self {
            storage,
            current,
            writer: Mutex::new(()),
        }
    }

    /// Stores `user` and `token` durably and in memory.
    ///
    /// The token is not inspected; the server alone decides whether it is
    /// valid. Subscribers observe the new session once this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted. The in-memory
    /// session is left unchanged in that case.
    pub fn set_auth(&self, user: User, token: impl Into<String>) -> Result<(), SessionError> {
        let token = token.into();
        let user_json = serde_json::to_string(&user)?;

        let _guard = self.writer.lock();
        self.storage
            .set_items(&[(USER_KEY, user_json.as_str()), (TOKEN_KEY, token.as_str())])?;
        self.current.send_replace(Some(Session::new(user, token)));
        tracing::debug!("Session stored");
        Ok(())
    }

    /// Clears the session from durable storage and memory.
    ///
    /// Safe to call when already logged out. Returns true if a session was
    /// present in memory and has now been cleared.
    pub fn logout(&self) -> bool {
        let _guard = self.writer.lock();
        if let Err(e) = self.storage.remove_items(&[USER_KEY, TOKEN_KEY]) {
            tracing::warn!(error = %e, "Failed to remove persisted session");
        }
        let mut cleared = false;
        self.current.send_if_modified(|current| {
            cleared = current.take().is_some();
            cleared
        });
        cleared
    }

    /// Returns the current session.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    /// Returns the current bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.token.clone())
    }

    /// Returns true if a session is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Subscribes to session changes.
    ///
    /// The receiver starts with the current value marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.current.subscribe()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &*self.current.borrow())
            .finish_non_exhaustive()
    }
}

fn restore(storage: &dyn KeyValueStorage) -> Option<Session> {
    let entries = storage
        .get_item(USER_KEY)
        .and_then(|user| Ok((user, storage.get_item(TOKEN_KEY)?)));

    let (user, token) = match entries {
        Ok((None, None)) => return None,
        Ok((Some(user), Some(token))) => (user, token),
        Ok(_) => {
            tracing::warn!("Persisted session is incomplete, starting logged out");
            discard(storage);
            return None;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read persisted session");
            return None;
        }
    };

    match serde_json::from_str::<User>(&user) {
        Ok(user) => Some(Session::new(user, token)),
        Err(e) => {
            tracing::warn!(error = %e, "Persisted user record is unreadable, starting logged out");
            discard(storage);
            None
        }
    }
}

fn discard(storage: &dyn KeyValueStorage) {
    if let Err(e) = storage.remove_items(&[USER_KEY, TOKEN_KEY]) {
        tracing::warn!(error = %e, "Failed to remove stale session entries");
    }
}
