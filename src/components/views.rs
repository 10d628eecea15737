//! Page components the router dispatches to.
//!
//! These are thin placeholders; the router only needs something to mount.

use leptos::{ev, prelude::*};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::config::{API_BASE_URL, APP_NAME};
use crate::core::BrowserSessionStore;
use crate::utils::log;

/// Login form. Reachable with or without a session.
#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let username = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let name = username.get_untracked();
        spawn_local(async move {
            match api::login(&BrowserSessionStore, API_BASE_URL, &name).await {
                Ok(_) => ctx.navigate(ctx.home_path()),
                Err(e) => {
                    log::warn(&e.to_string());
                    error.set(Some(e.to_string()));
                }
            }
            pending.set(false);
        });
    };

    view! {
        <main class="login">
            <h1>{APP_NAME}</h1>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>
                    "Sign in"
                </button>
            </form>
            {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
        </main>
    }
}

/// Shared header for authenticated pages.
#[component]
fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_logout = move |_| {
        if let Err(e) = api::logout(&BrowserSessionStore) {
            log::warn(&e.to_string());
        }
        ctx.navigate(ctx.login_path());
    };

    view! {
        <nav>
            <a href="#/home">"Home"</a>
            <a href="#/profile">"Profile"</a>
            <a href="#/search">"Search"</a>
            <button on:click=on_logout>"Log out"</button>
        </nav>
    }
}

#[component]
pub fn HomeView() -> impl IntoView {
    view! {
        <NavBar />
        <main class="home"><h1>"Stream"</h1></main>
    }
}

#[component]
pub fn ProfileView() -> impl IntoView {
    view! {
        <NavBar />
        <main class="profile"><h1>"Profile"</h1></main>
    }
}

#[component]
pub fn SearchView() -> impl IntoView {
    view! {
        <NavBar />
        <main class="search"><h1>"Search"</h1></main>
    }
}

/// Fallback for paths with no route.
#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <p>"No page at " <code>{path}</code></p>
            <a href="#/">"Back"</a>
        </main>
    }
}
