//! The navigation guard predicate.
//!
//! `allow = !requires_auth || session_active`. Total over its inputs and
//! free of side effects; the session is only read.

use crate::models::{RouteEntry, Session};

/// Outcome of guarding a matched route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

impl GuardDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide whether navigation to `entry` may proceed.
pub fn check(entry: &RouteEntry, session: &Session) -> GuardDecision {
    if !entry.requires_auth || session.is_active() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}
