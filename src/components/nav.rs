//! Top navigation bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::{AppRoute, Role};

stylance::import_crate_style!(css, "src/components/nav.module.css");

/// Brand plus role-specific links.
///
/// Visitors get a link to the login form; admins get a link back to the
/// public listing and a single logout button.
#[component]
pub fn NavBar(role: Role) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let links = match role {
        Role::Visitor => view! {
            <a class=css::link href=AppRoute::Login.to_hash()>
                <Icon icon=ic::LOCK />
                " Admin"
            </a>
        }
        .into_any(),
        Role::Admin => view! {
            <a class=css::link href=AppRoute::Files.to_hash()>"Public view"</a>
            <button class=css::logout on:click=move |_| ctx.logout()>
                <Icon icon=ic::LOGOUT />
                " Logout"
            </button>
        }
        .into_any(),
    };

    view! {
        <nav class=css::nav>
            <div class=css::brand>
                <span class=css::name>{APP_NAME}</span>
                <span class=css::tagline>{APP_TAGLINE}</span>
            </div>
            <div class=css::links>{links}</div>
        </nav>
    }
}
