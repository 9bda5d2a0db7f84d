//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and the admin gate (main entry point)
//! - [`explorer`] - File list, drop zone and delete button
//! - [`login`] - Admin password form
//! - [`nav`] - Navigation bar with logout
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;
pub mod login;
pub mod nav;
pub mod router;

pub use router::AppRouter;
