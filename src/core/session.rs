//! Session token storage.
//!
//! The guard never reads storage itself; callers load a [`Session`]
//! snapshot from a [`SessionStore`] on every navigation and pass it in.
//! Writes happen only from the login/logout flow.

use std::cell::RefCell;

use crate::config::SESSION_TOKEN_KEY;
use crate::core::error::SessionError;
use crate::models::Session;
use crate::utils::dom;

/// Backend holding the session token.
pub trait SessionStore {
    /// Current session. Unavailable storage reads as anonymous.
    fn load(&self) -> Session;

    /// Persist `token` as the session token.
    fn store(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the session token.
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-memory store, used by tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Session {
        Session::from_stored(self.token.borrow().clone())
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.token.borrow_mut().take();
        Ok(())
    }
}

/// Store backed by the tab's `sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Session {
        let token = dom::session_storage().and_then(|s| s.get_item(SESSION_TOKEN_KEY).ok()?);
        Session::from_stored(token)
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        let storage = dom::session_storage().ok_or(SessionError::StorageUnavailable)?;
        storage
            .set_item(SESSION_TOKEN_KEY, token)
            .map_err(|_| SessionError::WriteFailed)
    }

    fn clear(&self) -> Result<(), SessionError> {
        let storage = dom::session_storage().ok_or(SessionError::StorageUnavailable)?;
        storage
            .remove_item(SESSION_TOKEN_KEY)
            .map_err(|_| SessionError::RemoveFailed)
    }
}
