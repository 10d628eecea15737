//! Backend client for the login collaborator.
//!
//! Only the login view talks to the backend; the router never does.

mod auth;

pub use auth::{bearer_header, login, logout, session_url, settle_login, validate_username};
