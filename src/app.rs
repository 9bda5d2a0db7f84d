//! Root application module.
//!
//! Contains the main App component, AppContext definition, ExplorerState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::text;
use crate::core::{HttpApi, LocalStore, Session, files};
use crate::models::{AppRoute, FileId, ListState};
use crate::utils::dom;

// ============================================================================
// ExplorerState
// ============================================================================

/// File list state shared by the list, the drop zone and the delete buttons.
///
/// Every operation ends by replacing `list` wholesale. Concurrent operations
/// are not serialized, so the last response to arrive wins.
#[derive(Clone, Copy)]
pub struct ExplorerState {
    /// Result of the most recent list fetch.
    pub list: RwSignal<ListState>,
    /// Upload batches in flight. A count so that a batch finishing early
    /// does not hide the indicator of one still running.
    pub uploading: RwSignal<usize>,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(ListState::Loading),
            uploading: RwSignal::new(0),
        }
    }

    /// Any upload batch still running.
    pub fn is_uploading(&self) -> bool {
        self.uploading.get() > 0
    }

    fn begin_upload(&self) {
        self.uploading.update(|n| *n += 1);
    }

    fn end_upload(&self) {
        self.uploading.update(|n| *n = n.saturating_sub(1));
    }

    /// Re-fetch the whole list.
    pub fn reload(&self) {
        let list = self.list;
        spawn_local(async move {
            apply(list, files::load(&HttpApi).await);
        });
    }

    /// Upload a batch sequentially, alerting per failed file, then reload once.
    pub fn upload(&self, batch: Vec<web_sys::File>) {
        if batch.is_empty() {
            return;
        }

        let list = self.list;
        let explorer = *self;
        explorer.begin_upload();

        spawn_local(async move {
            let state = files::upload_batch(&HttpApi, &batch, |name, err| {
                web_sys::console::error_1(
                    &format!("Error uploading file {}: {}", name, err).into(),
                );
                dom::alert(&format!("Failed to upload {}", name));
            })
            .await;

            explorer.end_upload();
            apply(list, state);
        });
    }

    /// Delete one file; reload on success, alert on failure.
    pub fn delete(&self, id: FileId) {
        let list = self.list;
        spawn_local(async move {
            match files::delete(&HttpApi, &id).await {
                Ok(state) => apply(list, state),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error deleting file {}: {}", id, err).into(),
                    );
                    dom::alert(text::DELETE_FAILED);
                }
            }
        });
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(list: RwSignal<ListState>, state: ListState) {
    if let ListState::Failed(reason) = &state {
        web_sys::console::error_1(&format!("Error loading files: {}", reason).into());
    }
    list.set(state);
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current hash route.
    pub route: RwSignal<AppRoute>,

    /// Admin session flag, mirrored from localStorage.
    pub session: RwSignal<Session>,

    /// File list and upload progress.
    pub explorer: ExplorerState,
}

impl AppContext {
    /// Creates the context from the current URL and stored session.
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(AppRoute::current()),
            session: RwSignal::new(Session::restore(&LocalStore)),
            explorer: ExplorerState::new(),
        }
    }

    /// Re-read the session flag from storage.
    ///
    /// Returns the fresh session.
    pub fn refresh_session(&self) -> Session {
        let session = Session::restore(&LocalStore);
        self.session.set(session);
        session
    }

    /// Remove the session flag and go back to the public listing.
    pub fn logout(&self) {
        if let Err(err) = Session::end(&LocalStore) {
            web_sys::console::warn_1(&format!("Logout: {}", err).into());
        }
        self.session.set(Session::Anonymous);
        AppRoute::Files.push();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
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
                    background: #1a1016;
                    color: #f3e9ee;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ff6b9d; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="margin-bottom: 2rem; color: #ff6b9d;">
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
                            background: #ff6b9d;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_uploads_keep_indicator() {
        let explorer = ExplorerState::new();
        assert!(!explorer.is_uploading());

        explorer.begin_upload();
        explorer.begin_upload();
        explorer.end_upload();
        assert!(explorer.is_uploading());
        assert_eq!(explorer.uploading.get_untracked(), 1);

        explorer.end_upload();
        assert!(!explorer.is_uploading());

        // A stray end never underflows.
        explorer.end_upload();
        assert_eq!(explorer.uploading.get_untracked(), 0);
    }
}
