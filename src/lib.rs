//! Hash-routed web UI with a session-gated navigation guard.
//!
//! - [`models`] - Route table, views and the session snapshot
//! - [`core`] - Guard predicate, router and session storage
//! - [`api`] - Login/logout against the backend
//! - [`components`] - Leptos router and views

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
