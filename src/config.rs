//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::models::RootPolicy;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "WASAPhoto";

// =============================================================================
// Session Configuration
// =============================================================================

/// sessionStorage key holding the session token.
pub const SESSION_TOKEN_KEY: &str = "token";

// =============================================================================
// Routing Configuration
// =============================================================================

/// Where the bare root path (`#/`) sends the user.
///
/// Root is always a redirect; the guard then runs on the target.
pub const ROOT_POLICY: RootPolicy = RootPolicy::RedirectToLogin;

/// Upper bound on redirects followed for a single navigation.
pub const MAX_REDIRECTS: usize = 4;

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the photo backend.
pub const API_BASE_URL: &str = "http://localhost:3000";

/// Login endpoint, relative to [`API_BASE_URL`].
pub const SESSION_ENDPOINT: &str = "/session";
