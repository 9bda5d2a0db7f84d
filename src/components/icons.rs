//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuDownload as Download, LuFileCode as FileCode, LuLock as Lock, LuLogOut as Logout,
        LuTrash2 as Trash, LuUpload as Upload,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowRight as Logout, BsCloudArrowUp as Upload, BsDownload as Download,
        BsFileEarmarkCode as FileCode, BsLockFill as Lock, BsTrash as Trash,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FILE_CODE, FileCode);
themed_icon!(TRASH, Trash);
themed_icon!(DOWNLOAD, Download);
themed_icon!(UPLOAD, Upload);
themed_icon!(LOGOUT, Logout);
themed_icon!(LOCK, Lock);
