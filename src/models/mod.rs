//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`RouteEntry`], [`RouteTable`], [`RootPolicy`] - Hash-based route table
//! - [`Session`] - Tab-scoped session token snapshot
//! - [`View`] - Renderable view units

mod route;
mod session;
mod view;

pub use route::{
    ROOT_PATH, RootPolicy, RouteEntry, RouteTable, current_path, normalize_path, to_hash,
};
pub use session::Session;
pub use view::View;
