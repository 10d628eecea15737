//! Root application module.
//!
//! Contains the main App component and the AppContext shared with views.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::Router;
use crate::models::{current_path, normalize_path, to_hash};
use crate::utils::dom;

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; views use it to trigger
/// navigation without knowing about the hash format.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Immutable route table and root policy, built once at startup.
    pub router: StoredValue<Router>,
    /// Normalized path requested by the browser.
    pub requested: RwSignal<String>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::with_router(Router::default(), current_path())
    }

    /// Context over `router`, starting at an already normalized `path`.
    pub fn with_router(router: Router, path: String) -> Self {
        Self {
            router: StoredValue::new(router),
            requested: RwSignal::new(path),
        }
    }

    /// Navigate to `path`, adding a history entry.
    ///
    /// Sets the requested path directly as well, so navigating to the
    /// hash already shown (no hashchange) still re-runs the guard.
    pub fn navigate(&self, path: &str) {
        dom::set_hash(&to_hash(path));
        self.requested.set(normalize_path(path));
    }

    /// Path of the login route.
    pub fn login_path(&self) -> &'static str {
        self.router.with_value(|r| r.login_path())
    }

    /// Path of the home route, or login when the table has none.
    pub fn home_path(&self) -> &'static str {
        self.router.with_value(|r| r.home_path())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! { <AppRouter /> }
}
