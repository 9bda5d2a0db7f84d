//! Admin login form.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::{HttpApi, LocalStore, Session, auth};
use crate::models::{AppRoute, FormEffect, LoginForm, LoginOutcome};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/login/login.module.css");

/// Password form posting to the login endpoint.
///
/// On success the session flag is stored and the admin console opens. A
/// rejected password clears and refocuses the field; a connection failure
/// leaves it untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.pending) {
            return;
        }
        let Some(password) = form.try_update(|f| f.submit()) else {
            return;
        };

        spawn_local(async move {
            let outcome = auth::sign_in(&HttpApi, &LocalStore, &password).await;
            if let LoginOutcome::ConnectionFailed(err) = &outcome {
                web_sys::console::error_1(&format!("Login error: {}", err).into());
            }

            // The form may be gone if the user navigated away meanwhile.
            let Some(effect) = form.try_update(|f| f.resolve(outcome)) else {
                return;
            };
            match effect {
                FormEffect::Navigate => {
                    ctx.session.set(Session::Admin);
                    AppRoute::Admin.push();
                }
                FormEffect::Refocus => {
                    dom::focus_element("#password");
                }
                FormEffect::None => {}
            }
        });
    };

    let on_input = move |ev: ev::Event| {
        form.update(|f| f.password = event_target_value(&ev));
    };

    view! {
        <div class=css::container>
            <form class=css::card on:submit=on_submit>
                <div class=css::icon><Icon icon=ic::LOCK /></div>
                <h1 class=css::title>{APP_NAME} " Admin"</h1>
                <input
                    id="password"
                    class=css::input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    autofocus=true
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=on_input
                />
                {move || {
                    form.with(|f| f.error).map(|err| view! {
                        <p class=css::error role="alert">{err.message()}</p>
                    })
                }}
                <button
                    class=css::submit
                    type="submit"
                    disabled=move || form.with(|f| f.pending)
                >
                    "Login"
                </button>
                <a class=css::back href=AppRoute::Files.to_hash()>"Back to files"</a>
            </form>
        </div>
    }
}
