//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the navigation bar.
pub const APP_NAME: &str = "Donut SMP";

/// Tagline under the application name.
pub const APP_TAGLINE: &str = "Cheat vault";

// =============================================================================
// API Configuration
// =============================================================================

/// HTTP endpoints of the file server (same origin).
pub mod api {
    /// Base URL prepended to every endpoint. Empty means same origin.
    pub const BASE_URL: &str = "";

    /// `POST {password}` -> `{success}`.
    pub const LOGIN: &str = "/api/login";

    /// `GET` -> `[{id, name, size}]`.
    pub const FILES: &str = "/api/files";

    /// `POST` multipart with a single `file` field.
    pub const UPLOAD: &str = "/api/upload";

    /// Multipart field name for uploads.
    pub const UPLOAD_FIELD: &str = "file";

    /// Static directory uploaded files are served from.
    pub const DOWNLOADS: &str = "/uploads";
}

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage keys.
pub mod storage {
    /// Admin session flag.
    pub const AUTH_KEY: &str = "donut_smp_auth";

    /// Value written under [`AUTH_KEY`] for an active session.
    pub const AUTH_VALUE: &str = "true";

    /// Reserved for a local file index; nothing reads or writes it.
    #[allow(dead_code)]
    pub const FILES_KEY: &str = "donut_smp_files";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// How long a delete button stays armed before reverting (milliseconds).
pub const CONFIRM_TIMEOUT_MS: u32 = 3000;

/// User-facing strings.
pub mod text {
    pub const EMPTY_ADMIN: &str = "No cheats uploaded";
    pub const EMPTY_VISITOR: &str = "No cheats available yet";
    pub const LIST_ERROR: &str = "Error connecting to server";
    pub const LOADING: &str = "Loading...";
    pub const UPLOADING: &str = "Uploading...";
    pub const INVALID_PASSWORD: &str = "Invalid password";
    pub const CONNECTION_FAILED: &str = "Server connection failed.";
    pub const DELETE_FAILED: &str = "Failed to delete file";
    pub const CONFIRM_DELETE: &str = "Sure?";
    pub const DROP_HINT: &str = "Drag & drop files here, or click to browse";
}

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
