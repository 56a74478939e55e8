//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! ## 依存性の逆転（DIP）
//!
//! - ドメイン層が必要とするインターフェースをドメイン層自身が定義
//! - Infrastructure 層がドメイン層のインターフェースに依存
//! - ドメイン層は Infrastructure 層に依存しない

use async_trait::async_trait;

use super::{
    Like, Post, PostContent, PostId, RepositoryError, Timestamp, User, UserId, Username,
};

/// User Repository trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ユーザーを作成（ID はストアが採番）
    async fn create_user(
        &self,
        username: Username,
        created_at: Timestamp,
    ) -> Result<User, RepositoryError>;

    /// ユーザーを取得
    async fn find_user(&self, user_id: UserId) -> Result<User, RepositoryError>;

    /// ユーザーを削除
    async fn delete_user(&self, user_id: UserId) -> Result<(), RepositoryError>;
}

/// Post Repository trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// 投稿を作成（ID はストアが採番）
    async fn create_post(
        &self,
        author_id: UserId,
        content: PostContent,
        created_at: Timestamp,
    ) -> Result<Post, RepositoryError>;

    /// 投稿を作成者 ID 付きで取得
    ///
    /// 存在しない場合は `RepositoryError::PostNotFound`
    async fn find_post_with_author(&self, post_id: PostId) -> Result<Post, RepositoryError>;

    /// 投稿を削除
    async fn delete_post(&self, post_id: PostId) -> Result<(), RepositoryError>;
}

/// Like Repository trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// (user_id, post_id) のいいねを取得
    ///
    /// 存在しない場合は `RepositoryError::LikeNotFound`
    async fn find_like(&self, user_id: UserId, post_id: PostId) -> Result<Like, RepositoryError>;

    /// いいねを作成
    ///
    /// 同じ (user_id, post_id) が既に存在する場合は `RepositoryError::DuplicateLike`。
    /// 事前の存在チェックとは別に、ストア自身も一意性を保証する。
    async fn create_like(
        &self,
        user_id: UserId,
        post_id: PostId,
        created_at: Timestamp,
    ) -> Result<Like, RepositoryError>;

    /// いいねを削除
    async fn delete_like(&self, user_id: UserId, post_id: PostId) -> Result<(), RepositoryError>;

    /// 投稿に付いた全てのいいねを削除し、削除件数を返す
    async fn delete_likes_for_post(&self, post_id: PostId) -> Result<usize, RepositoryError>;

    /// 投稿のいいね数を取得
    async fn count_by_post(&self, post_id: PostId) -> Result<usize, RepositoryError>;
}
