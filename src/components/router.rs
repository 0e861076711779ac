//! Application router component.
//!
//! A single catch-all route: the URL pathname names a location in the remote
//! tree, and the entry type reported by the API decides what to render.
//!
//! - `dir` → [`DirectoryPage`]
//! - `video` → [`VideoPage`]
//! - anything else → a short fallback message
//!
//! Navigation pushes history entries; `popstate` keeps the route signal in
//! sync so back/forward work.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::browser::{DirectoryPage, Layout};
use crate::components::hooks::use_entry;
use crate::components::player::VideoPage;
use crate::core::LoadState;
use crate::models::{EntryInfo, EntryKind};

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.route.set(crate::models::AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let path = Signal::derive(move || ctx.route.get().path().to_string());
    let entry = use_entry(path);

    move || match entry.get() {
        LoadState::Loading => view! { <LoadingPage /> }.into_any(),
        LoadState::Failed => view! { <ErrorPage /> }.into_any(),
        LoadState::Loaded(info) => {
            let route = ctx.route.get_untracked();
            match info.kind {
                EntryKind::Dir => view! { <DirectoryPage route=route /> }.into_any(),
                EntryKind::Video => view! { <VideoPage route=route /> }.into_any(),
                EntryKind::Image | EntryKind::Text => {
                    view! { <UnsupportedPage entry=info /> }.into_any()
                }
            }
        }
    }
}

#[component]
fn LoadingPage() -> impl IntoView {
    view! {
        <Layout>
            <div class=css::skeleton aria-busy="true"></div>
        </Layout>
    }
}

/// Shown when the entry could not be fetched; details are in the console.
#[component]
fn ErrorPage() -> impl IntoView {
    view! {
        <Layout>
            <p class=css::message>"error! this location could not be loaded."</p>
        </Layout>
    }
}

#[component]
fn UnsupportedPage(entry: EntryInfo) -> impl IntoView {
    view! {
        <Layout>
            <p class=css::message>
                {format!("'{}' cannot be opened here.", entry.name)}
            </p>
        </Layout>
    }
}
