//! HTTP API request / response DTOs.

use serde::{Deserialize, Serialize};

use iine_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::{Like, Post, User};

/// Body of `POST /api/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// Body of `POST /api/posts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub user_id: i64,
    pub content: String,
}

/// Body of `POST` / `DELETE /api/posts/{post_id}/likes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeRequest {
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub created_at: String, // ISO 8601
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.value(),
            username: user.username.as_str().to_string(),
            created_at: timestamp_to_jst_rfc3339(user.created_at.value()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: String, // ISO 8601
}

impl From<&Post> for PostDto {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.value(),
            author_id: post.author_id.value(),
            content: post.content.as_str().to_string(),
            created_at: timestamp_to_jst_rfc3339(post.created_at.value()),
        }
    }
}

/// Post with its like count, for the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub like_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeDto {
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: String, // ISO 8601
}

impl From<&Like> for LikeDto {
    fn from(like: &Like) -> Self {
        Self {
            user_id: like.user_id.value(),
            post_id: like.post_id.value(),
            created_at: timestamp_to_jst_rfc3339(like.created_at.value()),
        }
    }
}

/// Error payload returned with every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Response of the debug connections endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionsDto {
    pub connections: usize,
}
