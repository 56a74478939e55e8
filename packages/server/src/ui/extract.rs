//! Extractors whose rejections are answered as [`ApiError`].
//!
//! axum's own `Json` and `Path` reply with plain-text bodies (and 422 for
//! a body that does not match the request type). These wrappers route
//! every rejection through `ApiError`, so clients always get a 400 with an
//! `{"error": ...}` body.

use axum::extract::{FromRequest, FromRequestParts};

use super::error::ApiError;

/// JSON request body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// URL path parameters
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
