//! Post/like server with live like notifications.
//!
//! Users create posts and like them; the author of a liked post receives a
//! push over a Server-Sent Events stream if they have one open.
//!
//! Layers:
//! - [`domain`]: entities, value objects, repository and registry traits
//! - [`usecase`]: like/unlike, posts, users, notification dispatch
//! - [`infrastructure`]: in-memory stores, connection registry, DTOs
//! - [`ui`]: axum handlers, router and server loop

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run as run_server;
