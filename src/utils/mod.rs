//! Utility modules for browser access.
//!
//! Provides:
//! - [`dom`] - Window, sessionStorage and URL hash helpers
//! - [`log`] - Browser console logging

pub mod dom;
pub mod log;
