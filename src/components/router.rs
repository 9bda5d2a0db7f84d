//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange
//! events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: `AppContext::route` follows `#/...`
//! - **Admin gate**: entering `#/admin` re-reads the session flag and
//!   replaces the location with `#/login` when it is missing

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::explorer::{DropZone, FileBrowser};
use crate::components::login::LoginPage;
use crate::components::nav::NavBar;
use crate::models::{AppRoute, Role};

stylance::import_crate_style!(css, "src/components/layout.module.css");

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `#/` → public file listing
/// - `#/login` → password form
/// - `#/admin` → upload / delete console (session required)
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.route;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Admin gate, checked on every entry into a protected route
    Effect::new(move |_| {
        if route.get().requires_session() && !ctx.refresh_session().is_admin() {
            AppRoute::Login.replace();
        }
    });

    view! {
        {move || match route.get() {
            AppRoute::Files => view! { <FilesPage /> }.into_any(),
            AppRoute::Login => view! { <LoginPage /> }.into_any(),
            AppRoute::Admin => view! {
                <Show when=move || ctx.session.get().is_admin()>
                    <AdminPage />
                </Show>
            }
            .into_any(),
        }}
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Public listing with download buttons.
#[component]
fn FilesPage() -> impl IntoView {
    view! {
        <div class=css::page>
            <NavBar role=Role::Visitor />
            <main class=css::main>
                <FileBrowser role=Role::Visitor />
            </main>
        </div>
    }
}

/// Admin console: drop zone plus the list with delete buttons.
#[component]
fn AdminPage() -> impl IntoView {
    view! {
        <div class=css::page>
            <NavBar role=Role::Admin />
            <main class=css::main>
                <DropZone />
                <FileBrowser role=Role::Admin />
            </main>
        </div>
    }
}
