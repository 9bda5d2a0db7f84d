//! Utility modules for DOM access and display formatting.
//!
//! Provides:
//! - [`dom`] - window, localStorage, navigation, alerts and downloads
//! - [`format`] - byte sizes and counters

pub mod dom;
pub mod format;
