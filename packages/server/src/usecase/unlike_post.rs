//! UseCase: いいね取り消し処理

use std::sync::Arc;

use crate::domain::{LikeRepository, PostId, RepositoryError, UserId};

use super::error::UnlikePostError;

/// いいね取り消しのユースケース
pub struct UnlikePostUseCase {
    likes: Arc<dyn LikeRepository>,
}

impl UnlikePostUseCase {
    pub fn new(likes: Arc<dyn LikeRepository>) -> Self {
        Self { likes }
    }

    /// いいねを削除する。通知は送らない。
    pub async fn execute(&self, user_id: UserId, post_id: PostId) -> Result<(), UnlikePostError> {
        self.likes
            .delete_like(user_id, post_id)
            .await
            .map_err(|e| match e {
                RepositoryError::LikeNotFound { user_id, post_id } => {
                    UnlikePostError::LikeNotFound { user_id, post_id }
                }
                other => UnlikePostError::Internal(other.to_string()),
            })
    }
}
