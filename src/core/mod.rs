//! Core navigation logic.
//!
//! This module provides:
//! - [`guard::check`] - The auth predicate run before every navigation
//! - [`Router`] - Path resolution, root handling and redirect following
//! - [`SessionStore`] - Where the session token lives between navigations

pub mod error;
pub mod guard;
mod router;
pub mod session;

pub use guard::GuardDecision;
pub use router::{Navigation, RedirectReason, Router};
pub use session::{BrowserSessionStore, MemorySessionStore, SessionStore};
