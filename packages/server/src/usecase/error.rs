//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{PostId, UserId};

/// いいね作成のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LikePostError {
    /// 対象の投稿が存在しない
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    /// 同じユーザーが既にいいね済み
    #[error("User {user_id} has already liked post {post_id}")]
    AlreadyLiked { user_id: UserId, post_id: PostId },

    /// 想定外のストアエラー
    #[error("Internal error: {0}")]
    Internal(String),
}

/// いいね取り消しのエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnlikePostError {
    #[error("User {user_id} has not liked post {post_id}")]
    LikeNotFound { user_id: UserId, post_id: PostId },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ユーザー登録のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterUserError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// 投稿作成のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreatePostError {
    #[error("Author not found: {0}")]
    AuthorNotFound(UserId),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// 投稿削除のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeletePostError {
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// 通知配信のエラー
///
/// 接続への書き込み失敗はここに含まれない（配信側で切断として処理される）。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Failed to serialize notification: {0}")]
    Serialization(String),
}
