//! File explorer UI components.
//!
//! Components:
//! - [`FileBrowser`] - Counter plus the role-specific file list
//! - [`DropZone`] - Drag-and-drop / click-to-pick upload area
//! - [`DeleteButton`] - Two-click delete with timed disarm

mod delete_button;
mod drop_zone;
mod file_list;

pub use delete_button::DeleteButton;
pub use drop_zone::DropZone;
pub use file_list::FileBrowser;
