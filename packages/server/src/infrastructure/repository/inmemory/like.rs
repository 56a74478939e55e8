//! InMemory Like Repository 実装
//!
//! (user_id, post_id) をキーとする HashMap で一意性を保証します。
//! 存在チェックと挿入は同じロック内で行うため、同時に同じペアの作成が
//! 来ても 2 件目は `DuplicateLike` になります。

use std::collections::{HashMap, hash_map::Entry};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Like, LikeRepository, PostId, RepositoryError, Timestamp, UserId};

/// インメモリ Like Repository 実装
#[derive(Default)]
pub struct InMemoryLikeRepository {
    likes: Mutex<HashMap<(UserId, PostId), Like>>,
}

impl InMemoryLikeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn find_like(&self, user_id: UserId, post_id: PostId) -> Result<Like, RepositoryError> {
        let likes = self.likes.lock().await;
        likes
            .get(&(user_id, post_id))
            .cloned()
            .ok_or(RepositoryError::LikeNotFound { user_id, post_id })
    }

    async fn create_like(
        &self,
        user_id: UserId,
        post_id: PostId,
        created_at: Timestamp,
    ) -> Result<Like, RepositoryError> {
        let mut likes = self.likes.lock().await;
        match likes.entry((user_id, post_id)) {
            Entry::Occupied(_) => Err(RepositoryError::DuplicateLike { user_id, post_id }),
            Entry::Vacant(slot) => {
                let like = Like::new(user_id, post_id, created_at);
                slot.insert(like.clone());
                Ok(like)
            }
        }
    }

    async fn delete_like(&self, user_id: UserId, post_id: PostId) -> Result<(), RepositoryError> {
        let mut likes = self.likes.lock().await;
        likes
            .remove(&(user_id, post_id))
            .map(|_| ())
            .ok_or(RepositoryError::LikeNotFound { user_id, post_id })
    }

    async fn delete_likes_for_post(&self, post_id: PostId) -> Result<usize, RepositoryError> {
        let mut likes = self.likes.lock().await;
        let before = likes.len();
        likes.retain(|(_, liked_post), _| *liked_post != post_id);
        Ok(before - likes.len())
    }

    async fn count_by_post(&self, post_id: PostId) -> Result<usize, RepositoryError> {
        let likes = self.likes.lock().await;
        Ok(likes.keys().filter(|(_, p)| *p == post_id).count())
    }
}
