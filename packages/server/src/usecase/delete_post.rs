//! UseCase: 投稿削除処理
//!
//! 投稿と、その投稿に付いたいいねをまとめて削除する。

use std::sync::Arc;

use crate::domain::{LikeRepository, PostId, PostRepository, RepositoryError};

use super::error::DeletePostError;

/// 投稿削除のユースケース
pub struct DeletePostUseCase {
    posts: Arc<dyn PostRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl DeletePostUseCase {
    pub fn new(posts: Arc<dyn PostRepository>, likes: Arc<dyn LikeRepository>) -> Self {
        Self { posts, likes }
    }

    pub async fn execute(&self, post_id: PostId) -> Result<(), DeletePostError> {
        self.posts
            .delete_post(post_id)
            .await
            .map_err(|e| match e {
                RepositoryError::PostNotFound(id) => DeletePostError::PostNotFound(id),
                other => DeletePostError::Internal(other.to_string()),
            })?;

        let removed = self
            .likes
            .delete_likes_for_post(post_id)
            .await
            .map_err(|e| DeletePostError::Internal(e.to_string()))?;
        tracing::info!("Deleted post {} with {} like(s)", post_id, removed);
        Ok(())
    }
}
