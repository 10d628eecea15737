//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the requested path is derived from `#/path`
//! - **Guard runs on every change**: the session is re-read from storage each time
//! - **Redirects replace history**: `replaceState` keeps them out of the back stack

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::views::{HomeView, LoginView, NotFound, ProfileView, SearchView};
use crate::config::APP_NAME;
use crate::core::error::RouterError;
use crate::core::{BrowserSessionStore, Navigation, Router, SessionStore};
use crate::models::{Session, View};
use crate::utils::{dom, log};

/// Requested path paired with the decision made for it.
///
/// Kept together so a new request is observed even when it settles on
/// the same navigation as the previous one.
pub type Resolved = (String, Result<Navigation, RouterError>);

/// Hash to write back when the settled target differs from the request.
pub fn commit(requested: &str, nav: &Navigation) -> Option<String> {
    (nav.target() != requested).then(|| nav.to_hash())
}

/// Memo re-running the guard whenever `requested` is set.
///
/// `load` is called on every run; its result is never cached.
pub fn resolve_requested(
    router: StoredValue<Router>,
    requested: RwSignal<String>,
    load: impl Fn() -> Session + Send + Sync + 'static,
) -> Memo<Resolved> {
    Memo::new(move |_| {
        let path = requested.get();
        let session = load();
        let nav = router.with_value(|router| router.navigate(&path, &session));
        (path, nav)
    })
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `#/` → redirect per root policy
/// - `#/login` → LoginView, always reachable
/// - `#/home`, `#/profile`, `#/search` → views behind the session guard
/// - anything else → NotFound
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let requested = ctx.requested;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            requested.set(crate::models::current_path());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let resolved = resolve_requested(ctx.router, requested, || BrowserSessionStore.load());

    // Commit redirects to the address bar
    Effect::new(move |_| {
        let (path, nav) = resolved.get();
        match nav {
            Ok(nav) => {
                if let Some(hash) = commit(&path, &nav) {
                    log::debug(&format!("redirect {} -> {}", path, nav.target()));
                    dom::replace_hash(&hash);
                    requested.set(nav.target().to_string());
                }
                if let Some(view) = nav.view() {
                    dom::set_title(&format!("{} · {}", view.title(), APP_NAME));
                }
            }
            Err(e) => log::warn(&e.to_string()),
        }
    });

    move || match resolved.get().1 {
        Ok(Navigation::Proceed { view, .. }) => render_view(view),
        Ok(Navigation::NotFound { path }) => view! { <NotFound path=path /> }.into_any(),
        Ok(Navigation::Redirect { to, .. }) => view! { <p>"Redirecting to " {to}</p> }.into_any(),
        Err(e) => view! { <p class="router-error">{e.to_string()}</p> }.into_any(),
    }
}

fn render_view(view: View) -> AnyView {
    match view {
        View::Login => view! { <LoginView /> }.into_any(),
        View::Home => view! { <HomeView /> }.into_any(),
        View::Profile => view! { <ProfileView /> }.into_any(),
        View::Search => view! { <SearchView /> }.into_any(),
    }
}
