//! Data transfer objects for the HTTP API and the notification stream.

pub mod http;
pub mod sse;
