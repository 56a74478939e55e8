//! UseCase: 投稿作成処理

use std::sync::Arc;

use crate::domain::{Post, PostContent, PostRepository, RepositoryError, Timestamp, UserId, UserRepository};

use super::error::CreatePostError;

/// 投稿作成のユースケース
pub struct CreatePostUseCase {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CreatePostUseCase {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    /// 投稿を作成する。作成者は登録済みでなければならない。
    pub async fn execute(
        &self,
        author_id: UserId,
        content: PostContent,
    ) -> Result<Post, CreatePostError> {
        self.users
            .find_user(author_id)
            .await
            .map_err(|e| match e {
                RepositoryError::UserNotFound(id) => CreatePostError::AuthorNotFound(id),
                other => CreatePostError::Internal(other.to_string()),
            })?;

        let post = self
            .posts
            .create_post(author_id, content, Timestamp::now())
            .await
            .map_err(|e| CreatePostError::Internal(e.to_string()))?;
        tracing::info!("User {} created post {}", author_id, post.id);
        Ok(post)
    }
}
