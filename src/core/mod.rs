//! Core logic of the file manager.
//!
//! This module provides:
//! - [`api`] - the [`FileApi`] seam and the browser [`HttpApi`]
//! - [`auth`] - password sign-in and the [`Session`] flag
//! - [`files`] - list, upload batch and delete orchestration
//! - [`error`] - typed errors

pub mod api;
pub mod auth;
pub mod error;
pub mod files;

pub use api::HttpApi;
pub use auth::{LocalStore, Session};
