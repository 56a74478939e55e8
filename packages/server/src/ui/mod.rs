//! UI 層
//!
//! HTTP / SSE のエンドポイントと、サーバーの起動・停止を扱います。

pub mod error;
mod extract;
mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{create_router, run, serve};
