//! Root application module.
//!
//! Contains the main App component and the AppContext shared by every page.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::API_BASE_URL;
use crate::core::ApiClient;
use crate::models::AppRoute;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Client for the listing API and media server.
    pub api: StoredValue<ApiClient>,

    /// Current location. The URL pathname is the source of truth; this signal
    /// follows it through [`navigate`](Self::navigate) and `popstate`.
    pub route: RwSignal<AppRoute>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            api: StoredValue::new(ApiClient::new(API_BASE_URL)),
            route: RwSignal::new(AppRoute::current()),
        }
    }

    /// Go to `route`, adding a history entry.
    ///
    /// The player may have replaced the address after auto-advancing, so the
    /// signal alone does not say where the user is.
    pub fn navigate(&self, route: AppRoute) {
        if self.route.with_untracked(|current| *current == route) && AppRoute::current() == route {
            return;
        }
        route.push();
        self.route.set(route);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0a0a0a;
                    color: #e5e5e5;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #f87171; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #a3a3a3; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #7c3aed;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 6px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
