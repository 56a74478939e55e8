//! HTTP error responses.
//!
//! Every use case error is mapped to a status code and an `{"error": ...}`
//! body here. Internal errors are logged and answered with a generic message.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::{RegistryError, RepositoryError, ValueObjectError},
    infrastructure::dto::http::ErrorDto,
    usecase::{
        CreatePostError, DeletePostError, LikePostError, RegisterUserError, UnlikePostError,
    },
};

const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug)]
pub enum ApiError {
    /// 400: invalid input or conflicting state
    BadRequest(String),
    /// 404
    NotFound(String),
    /// 503: the server is shutting down
    ServiceUnavailable(String),
    /// 500: detail is logged, never returned
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::ServiceUnavailable(message) => (StatusCode::SERVICE_UNAVAILABLE, message),
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };
        (status, Json(ErrorDto { error: message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::ShuttingDown => ApiError::ServiceUnavailable(e.to_string()),
        }
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(e: ValueObjectError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::UserNotFound(_)
            | RepositoryError::PostNotFound(_)
            | RepositoryError::LikeNotFound { .. } => ApiError::NotFound(e.to_string()),
            RepositoryError::DuplicateLike { .. } => ApiError::BadRequest(e.to_string()),
            RepositoryError::Storage(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<LikePostError> for ApiError {
    fn from(e: LikePostError) -> Self {
        match e {
            LikePostError::PostNotFound(_) => ApiError::NotFound(e.to_string()),
            LikePostError::AlreadyLiked { .. } => ApiError::BadRequest(e.to_string()),
            LikePostError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<UnlikePostError> for ApiError {
    fn from(e: UnlikePostError) -> Self {
        match e {
            UnlikePostError::LikeNotFound { .. } => ApiError::NotFound(e.to_string()),
            UnlikePostError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<RegisterUserError> for ApiError {
    fn from(e: RegisterUserError) -> Self {
        match e {
            RegisterUserError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<CreatePostError> for ApiError {
    fn from(e: CreatePostError) -> Self {
        match e {
            CreatePostError::AuthorNotFound(_) => ApiError::NotFound(e.to_string()),
            CreatePostError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<DeletePostError> for ApiError {
    fn from(e: DeletePostError) -> Self {
        match e {
            DeletePostError::PostNotFound(_) => ApiError::NotFound(e.to_string()),
            DeletePostError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}
