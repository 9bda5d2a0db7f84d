//! Upload area: drag-and-drop target plus hidden file picker.

use leptos::{ev, html, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::text;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/explorer/drop_zone.module.css");

#[component]
pub fn DropZone() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    let drag_over = RwSignal::new(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let on_dragover = move |ev: ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(true);
    };

    let on_dragleave = move |_: ev::DragEvent| {
        drag_over.set(false);
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| dom::files_of(&list))
            .unwrap_or_default();
        explorer.upload(files);
    };

    // The picker sits outside the zone so its own click does not bubble back here.
    let on_click = move |_: ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_: ev::Event| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let files = input
            .files()
            .map(|list| dom::files_of(&list))
            .unwrap_or_default();
        // Allow picking the same file again.
        input.set_value("");
        explorer.upload(files);
    };

    let zone_class = move || {
        if drag_over.get() {
            format!("{} {}", css::zone, css::dragOver)
        } else {
            css::zone.to_string()
        }
    };

    view! {
        <div
            class=zone_class
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=on_click
            role="button"
            tabindex="0"
            aria-label="Upload files"
        >
            <span class=css::icon><Icon icon=ic::UPLOAD /></span>
            <p class=css::hint>{text::DROP_HINT}</p>
            <Show when=move || explorer.is_uploading()>
                <p class=css::busy>{text::UPLOADING}</p>
            </Show>
        </div>
        <input
            id="file-input"
            class=css::picker
            type="file"
            multiple=true
            node_ref=input_ref
            on:change=on_change
        />
    }
}
