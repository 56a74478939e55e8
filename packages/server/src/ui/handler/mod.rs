//! Handler modules for HTTP and SSE endpoints.

pub mod http;
pub mod sse;

// Re-export HTTP handlers
pub use http::{
    create_post, create_user, debug_connections, delete_post, get_post, get_user, health_check,
    like_post, unlike_post,
};

// Re-export SSE handlers
pub use sse::notification_stream_handler;
