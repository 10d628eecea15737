//! UI components built with Leptos.
//!
//! - [`router`] - Application routing and the navigation guard hook-up
//! - [`views`] - Pages the router dispatches to

pub mod router;
pub mod views;

pub use router::AppRouter;
