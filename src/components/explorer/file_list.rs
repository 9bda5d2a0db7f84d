//! File list component.
//!
//! Renders [`FileListView`] for the current role. Every list update
//! re-renders all rows; there is no per-row diffing.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::explorer::DeleteButton;
use crate::components::icons as ic;
use crate::config::text;
use crate::models::{FileListView, FileRow, Role, RowAction, count_label};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// List header with file counter, followed by the rows or an empty state.
///
/// Fetches the list once when mounted.
#[component]
pub fn FileBrowser(role: Role) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let explorer = ctx.explorer;

    explorer.reload();

    let count = Signal::derive(move || {
        let uploading = explorer.is_uploading();
        explorer.list.with(|state| count_label(state, uploading))
    });

    let title = match role {
        Role::Admin => "Uploaded files",
        Role::Visitor => "Available downloads",
    };

    view! {
        <section class=css::browser>
            <header class=css::header>
                <h2 class=css::title>{title}</h2>
                <span class=css::fileCount>{count}</span>
            </header>
            <div class=css::list role="list" aria-label="File list">
                {move || match explorer.list.with(|state| FileListView::build(role, state)) {
                    FileListView::Loading => view! {
                        <div class=css::emptyState><p>{text::LOADING}</p></div>
                    }
                    .into_any(),
                    FileListView::Empty(message) => view! {
                        <div class=css::emptyState><p>{message}</p></div>
                    }
                    .into_any(),
                    FileListView::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <FileListItem row=row /> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn FileListItem(row: FileRow) -> impl IntoView {
    let action = match row.action {
        RowAction::Delete => view! { <DeleteButton id=row.id.clone() /> }.into_any(),
        RowAction::Download => view! {
            <DownloadButton url=row.download_url.clone() name=row.name.clone() />
        }
        .into_any(),
    };

    view! {
        <div class=css::fileItem role="listitem">
            <div class=css::fileIcon aria-hidden="true"><Icon icon=ic::FILE_CODE /></div>
            <div class=css::fileInfo>
                <div class=css::fileName>{row.name}</div>
                <div class=css::fileSize>{row.size}</div>
            </div>
            <div class=css::fileStatus>{action}</div>
        </div>
    }
}

/// Visitor download through a transient anchor; no API call involved.
#[component]
fn DownloadButton(url: String, name: String) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if !dom::trigger_download(&url, &name) {
            web_sys::console::warn_1(&format!("Download of {} could not be started", name).into());
        }
    };

    view! {
        <button class=css::downloadBtn title="Download Cheat" on:click=on_click>
            "Download "
            <Icon icon=ic::DOWNLOAD />
        </button>
    }
}
