//! Core domain models.

use serde::{Deserialize, Serialize};

use super::value_object::{PostContent, PostId, Timestamp, UserId, Username};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub created_at: Timestamp,
}

impl User {
    pub fn new(id: UserId, username: Username, created_at: Timestamp) -> Self {
        Self {
            id,
            username,
            created_at,
        }
    }
}

/// A post, always loaded together with its author id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub content: PostContent,
    pub created_at: Timestamp,
}

impl Post {
    pub fn new(id: PostId, author_id: UserId, content: PostContent, created_at: Timestamp) -> Self {
        Self {
            id,
            author_id,
            content,
            created_at,
        }
    }

    /// Whether `user_id` wrote this post
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// A like: `user_id` liked `post_id`.
///
/// A given (user_id, post_id) pair exists at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user_id: UserId,
    pub post_id: PostId,
    pub created_at: Timestamp,
}

impl Like {
    pub fn new(user_id: UserId, post_id: PostId, created_at: Timestamp) -> Self {
        Self {
            user_id,
            post_id,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_is_authored_by() {
        // テスト項目: 投稿の作成者を判定できる
        // given (前提条件):
        let author = UserId::new(1).unwrap();
        let other = UserId::new(2).unwrap();
        let post = Post::new(
            PostId::new(10).unwrap(),
            author,
            PostContent::new("hello".to_string()).unwrap(),
            Timestamp::new(0),
        );

        // then (期待する結果):
        assert!(post.is_authored_by(author));
        assert!(!post.is_authored_by(other));
    }
}
