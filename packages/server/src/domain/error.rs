//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::{PostId, UserId};

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// UserId must be a positive integer
    #[error("UserId must be a positive integer (got {0})")]
    UserIdNotPositive(i64),

    /// PostId must be a positive integer
    #[error("PostId must be a positive integer (got {0})")]
    PostIdNotPositive(i64),

    /// Username validation error
    #[error("Username cannot be empty")]
    UsernameEmpty,

    /// Username too long error
    #[error("Username cannot exceed {max} characters (got {actual})")]
    UsernameTooLong { max: usize, actual: usize },

    /// PostContent validation error
    #[error("PostContent cannot be empty")]
    PostContentEmpty,

    /// PostContent too long error
    #[error("PostContent cannot exceed {max} characters (got {actual})")]
    PostContentTooLong { max: usize, actual: usize },
}

/// Errors returned by the data stores
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Like not found: user {user_id}, post {post_id}")]
    LikeNotFound { user_id: UserId, post_id: PostId },

    /// Uniqueness violation on (user_id, post_id)
    #[error("Like already exists: user {user_id}, post {post_id}")]
    DuplicateLike { user_id: UserId, post_id: PostId },

    /// Any other storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Errors from the connection registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// `close_all` has run; no new streams are accepted
    #[error("Server is shutting down")]
    ShuttingDown,
}

/// Errors when writing to a live connection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The stream behind the connection is gone (client disconnected)
    #[error("Connection closed")]
    Closed,
}
