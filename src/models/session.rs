//! Session state as seen by the navigation guard.

/// Snapshot of the tab-scoped session token.
///
/// The token is opaque: only its presence matters. No signature, expiry
/// or content checks are performed client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Session with no token.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session carrying `token` as-is.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Build from a raw storage read.
    pub fn from_stored(token: Option<String>) -> Self {
        Self { token }
    }

    /// `true` iff a non-empty token is present.
    pub fn is_active(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// The token, if the session is active.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
