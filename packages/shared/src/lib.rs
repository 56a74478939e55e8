//! Shared utilities for iine.

pub mod logger;
pub mod time;
