//! File list state and its render-ready view model.
//!
//! Components never inspect [`ListState`] directly; they render whatever
//! [`FileListView::build`] produces for the current [`Role`].

use crate::config::text;
use crate::models::{FileId, FileRecord};
use crate::utils::format::{format_count, format_size};

/// Who is looking at the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Logged-in admin: rows carry a delete button, uploads enabled.
    Admin,
    /// Public visitor: rows carry a download button.
    Visitor,
}

impl Role {
    /// Message shown when the server has no files.
    pub fn empty_message(self) -> &'static str {
        match self {
            Role::Admin => text::EMPTY_ADMIN,
            Role::Visitor => text::EMPTY_VISITOR,
        }
    }
}

/// Result of the last list fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListState {
    /// No response yet.
    #[default]
    Loading,
    /// Full list as returned by the server.
    Loaded(Vec<FileRecord>),
    /// Fetch failed; the reason is only logged.
    Failed(String),
}

/// Per-row action control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    Download,
}

/// One rendered row.
#[derive(Clone, Debug, PartialEq)]
pub struct FileRow {
    pub id: FileId,
    pub name: String,
    pub size: String,
    pub download_url: String,
    pub action: RowAction,
}

/// What the list area should show.
#[derive(Clone, Debug, PartialEq)]
pub enum FileListView {
    Loading,
    /// Empty-state box with a single message.
    Empty(&'static str),
    Rows(Vec<FileRow>),
}

impl FileListView {
    pub fn build(role: Role, state: &ListState) -> Self {
        match state {
            ListState::Loading => Self::Loading,
            ListState::Failed(_) => Self::Empty(text::LIST_ERROR),
            ListState::Loaded(files) if files.is_empty() => Self::Empty(role.empty_message()),
            ListState::Loaded(files) => {
                let action = match role {
                    Role::Admin => RowAction::Delete,
                    Role::Visitor => RowAction::Download,
                };
                Self::Rows(
                    files
                        .iter()
                        .map(|file| FileRow {
                            id: file.id.clone(),
                            name: file.name.clone(),
                            size: format_size(file.size),
                            download_url: file.download_url(),
                            action,
                        })
                        .collect(),
                )
            }
        }
    }
}

/// Text for the file counter.
///
/// An upload in flight overrides everything; a failed or pending fetch
/// leaves the counter blank.
pub fn count_label(state: &ListState, uploading: bool) -> String {
    if uploading {
        return text::UPLOADING.to_string();
    }
    match state {
        ListState::Loaded(files) => format_count(files.len()),
        ListState::Loading | ListState::Failed(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, name: &str, size: u64) -> FileRecord {
        FileRecord {
            id: FileId::Number(id),
            name: name.to_string(),
            size,
        }
    }

    #[test]
    fn test_empty_state_is_role_specific() {
        let state = ListState::Loaded(Vec::new());
        assert_eq!(
            FileListView::build(Role::Admin, &state),
            FileListView::Empty("No cheats uploaded")
        );
        assert_eq!(
            FileListView::build(Role::Visitor, &state),
            FileListView::Empty("No cheats available yet")
        );
    }

    #[test]
    fn test_failed_fetch_shows_connection_error() {
        let state = ListState::Failed("HTTP error: 500".to_string());
        for role in [Role::Admin, Role::Visitor] {
            assert_eq!(
                FileListView::build(role, &state),
                FileListView::Empty("Error connecting to server")
            );
        }
    }

    #[test]
    fn test_rows_carry_role_action() {
        let state = ListState::Loaded(vec![record(1, "a.jar", 1536), record(2, "b.jar", 0)]);

        let FileListView::Rows(rows) = FileListView::build(Role::Admin, &state) else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.action == RowAction::Delete));
        assert_eq!(rows[0].size, "1.5 KB");
        assert_eq!(rows[1].size, "0 Bytes");

        let FileListView::Rows(rows) = FileListView::build(Role::Visitor, &state) else {
            panic!("expected rows");
        };
        assert!(rows.iter().all(|r| r.action == RowAction::Download));
        assert_eq!(rows[0].download_url, "/uploads/a.jar");
    }

    #[test]
    fn test_count_label() {
        let state = ListState::Loaded(vec![record(1, "a", 1)]);
        assert_eq!(count_label(&state, false), "1 file");
        assert_eq!(count_label(&state, true), "Uploading...");
        assert_eq!(count_label(&ListState::Loaded(Vec::new()), false), "0 files");
        assert_eq!(count_label(&ListState::Loading, false), "");
    }
}
