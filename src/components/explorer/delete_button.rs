//! Two-click delete button.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{CONFIRM_TIMEOUT_MS, text};
use crate::models::{ConfirmAction, ConfirmGuard, FileId};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// [`ConfirmGuard`] with its disarm timer attached.
///
/// The pending timer lives in a local stored value, so it is cancelled when
/// the guard is confirmed or its owner is disposed.
#[derive(Clone, Copy)]
pub struct ConfirmTimer {
    guard: RwSignal<ConfirmGuard>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    timeout_ms: u32,
}

impl ConfirmTimer {
    pub fn new() -> Self {
        Self::with_timeout(CONFIRM_TIMEOUT_MS)
    }

    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self {
            guard: RwSignal::new(ConfirmGuard::Idle),
            timer: StoredValue::new_local(None),
            timeout_ms,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.guard.get().is_armed()
    }

    /// Feed a click through the guard. Returns true when it confirms.
    pub fn click(&self) -> bool {
        let guard = self.guard;
        let (next, action) = guard.get_untracked().click();
        guard.set(next);

        match action {
            ConfirmAction::StartTimer => {
                let handle = Timeout::new(self.timeout_ms, move || {
                    // No-op once the row has been re-rendered away.
                    let _ = guard.try_update(|g| *g = g.timeout().0);
                });
                self.timer.set_value(Some(handle));
                false
            }
            ConfirmAction::Confirm => {
                // Dropping the handle clears the pending timeout.
                self.timer.set_value(None);
                true
            }
            ConfirmAction::Nothing => false,
        }
    }
}

impl Default for ConfirmTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Delete control driven by [`ConfirmTimer`].
///
/// The first click arms the button and shows "Sure?"; a second click within
/// [`CONFIRM_TIMEOUT_MS`] deletes.
#[component]
pub fn DeleteButton(id: FileId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let confirm = ConfirmTimer::new();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if confirm.click() {
            ctx.explorer.delete(id.clone());
        }
    };

    let class = move || {
        if confirm.is_armed() {
            format!("{} {}", css::deleteBtn, css::confirmState)
        } else {
            css::deleteBtn.to_string()
        }
    };

    view! {
        <button class=class title="Delete File" on:click=on_click>
            {move || {
                if confirm.is_armed() {
                    view! { <span>{text::CONFIRM_DELETE}</span> }.into_any()
                } else {
                    view! { <Icon icon=ic::TRASH /> }.into_any()
                }
            }}
        </button>
    }
}
