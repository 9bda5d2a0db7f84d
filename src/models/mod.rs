//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileRecord`], [`FileId`] - Files as listed by the server
//! - [`ListState`], [`FileListView`], [`Role`] - List rendering
//! - [`ConfirmGuard`] - Delete confirmation state machine
//! - [`LoginForm`], [`LoginOutcome`] - Login form state
//! - [`AppRoute`] - Hash-based navigation

mod confirm;
mod file;
mod listing;
mod login;
mod route;

pub use confirm::{ConfirmAction, ConfirmGuard};
pub use file::{FileId, FileRecord, delete_url};
pub use listing::{FileListView, FileRow, ListState, Role, RowAction, count_label};
pub use login::{FormEffect, LoginForm, LoginOutcome};
pub use route::AppRoute;
