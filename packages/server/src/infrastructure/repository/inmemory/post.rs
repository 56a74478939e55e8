//! InMemory Post Repository 実装

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Post, PostContent, PostId, PostRepository, RepositoryError, Timestamp, UserId};

#[derive(Default)]
struct PostTable {
    last_id: i64,
    posts: HashMap<PostId, Post>,
}

/// インメモリ Post Repository 実装
#[derive(Default)]
pub struct InMemoryPostRepository {
    table: Mutex<PostTable>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(
        &self,
        author_id: UserId,
        content: PostContent,
        created_at: Timestamp,
    ) -> Result<Post, RepositoryError> {
        let mut table = self.table.lock().await;
        let id = PostId::new(table.last_id + 1)
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        table.last_id = id.value();

        let post = Post::new(id, author_id, content, created_at);
        table.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn find_post_with_author(&self, post_id: PostId) -> Result<Post, RepositoryError> {
        let table = self.table.lock().await;
        table
            .posts
            .get(&post_id)
            .cloned()
            .ok_or(RepositoryError::PostNotFound(post_id))
    }

    async fn delete_post(&self, post_id: PostId) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().await;
        table
            .posts
            .remove(&post_id)
            .map(|_| ())
            .ok_or(RepositoryError::PostNotFound(post_id))
    }
}
