//! Custom error types for the application.
//!
//! The navigation guard itself never fails; these cover everything around it:
//!
//! - [`RouteTableError`] - Invalid route table construction
//! - [`RouterError`] - Redirect following that does not settle
//! - [`SessionError`] - sessionStorage operations for the session token
//! - [`LoginError`] - Login request against the backend

use thiserror::Error;

/// Route table validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    /// Path is relative or the bare root.
    #[error("invalid route path '{0}' (must start with '/' and not be the root)")]
    InvalidPath(String),
    /// Path appears more than once.
    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),
    /// No route is reachable without a session.
    #[error("route table has no public (login) entry")]
    NoPublicEntry,
    /// More than one route is reachable without a session.
    #[error("route table has {0} public entries, expected exactly one")]
    MultiplePublicEntries(usize),
}

/// Navigation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Redirects kept chaining past the configured limit.
    #[error("redirect loop while navigating to '{path}' ({hops} hops)")]
    RedirectLoop { path: String, hops: usize },
}

/// Session token storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// sessionStorage not available.
    #[error("sessionStorage not available")]
    StorageUnavailable,
    /// Failed to save to sessionStorage.
    #[error("failed to save session token")]
    WriteFailed,
    /// Failed to remove from sessionStorage.
    #[error("failed to remove session token")]
    RemoveFailed,
}

/// Login request errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// Username empty after trimming.
    #[error("username must not be empty")]
    InvalidUsername,
    /// Request could not be built or sent.
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-success status.
    #[error("login failed: HTTP {0}")]
    Http(u16),
    /// Response body was not a JSON identifier.
    #[error("unexpected login response: {0}")]
    Decode(String),
    /// Token could not be persisted.
    #[error(transparent)]
    Session(#[from] SessionError),
}
