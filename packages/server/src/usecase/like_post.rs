//! UseCase: いいね作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LikePostUseCase::execute() メソッド
//! - 投稿の存在確認 → 既存いいねの確認 → 保存 → 作成者への通知
//!
//! ### なぜこのテストが必要か
//! - 1 ユーザー 1 投稿につきいいねは 1 回まで、という不変条件を保証する
//! - 通知の成否がいいね作成の結果に影響しないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：作成者が接続中（通知が届く）/ 未接続（通知なしで成功）
//! - 異常系：存在しない投稿、いいね済み、ストアの想定外エラー
//! - エッジケース：存在チェック後に同じペアが作られていた（ストア側の一意性違反）

use std::sync::Arc;

use crate::domain::{
    Like, LikeEvent, LikeRepository, Notification, PostId, PostRepository, RepositoryError,
    Timestamp, UserId,
};

use super::{error::LikePostError, notification_dispatcher::NotificationDispatcher};

/// いいね作成のユースケース
pub struct LikePostUseCase {
    posts: Arc<dyn PostRepository>,
    likes: Arc<dyn LikeRepository>,
    dispatcher: Arc<NotificationDispatcher>,
}

impl LikePostUseCase {
    /// 新しい LikePostUseCase を作成
    pub fn new(
        posts: Arc<dyn PostRepository>,
        likes: Arc<dyn LikeRepository>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            posts,
            likes,
            dispatcher,
        }
    }

    /// いいね作成を実行
    ///
    /// # Arguments
    ///
    /// * `user_id` - いいねするユーザー
    /// * `post_id` - 対象の投稿
    ///
    /// # Returns
    ///
    /// * `Ok(Like)` - 保存されたいいね（通知が届いたかどうかに関わらない）
    /// * `Err(LikePostError)` - 投稿なし・いいね済み・内部エラー
    pub async fn execute(&self, user_id: UserId, post_id: PostId) -> Result<Like, LikePostError> {
        // 1. 投稿の存在確認（作成者 ID を得る）
        let post = self
            .posts
            .find_post_with_author(post_id)
            .await
            .map_err(|e| match e {
                RepositoryError::PostNotFound(id) => LikePostError::PostNotFound(id),
                other => LikePostError::Internal(other.to_string()),
            })?;

        // 2. 既存いいねの確認
        match self.likes.find_like(user_id, post_id).await {
            Ok(_) => return Err(LikePostError::AlreadyLiked { user_id, post_id }),
            Err(RepositoryError::LikeNotFound { .. }) => {}
            Err(other) => return Err(LikePostError::Internal(other.to_string())),
        }

        // 3. 保存
        let like = self
            .likes
            .create_like(user_id, post_id, Timestamp::now())
            .await
            .map_err(|e| match e {
                RepositoryError::DuplicateLike { user_id, post_id } => {
                    LikePostError::AlreadyLiked { user_id, post_id }
                }
                other => LikePostError::Internal(other.to_string()),
            })?;

        // 4. 作成者へ通知（失敗してもいいねは取り消さない）
        if post.is_authored_by(user_id) {
            tracing::debug!("User {} liked their own post {}", user_id, post_id);
        }
        let notification = Notification::Like(LikeEvent {
            actor_user_id: user_id,
            post_id,
            recipient_user_id: post.author_id,
        });
        let recipient = notification.recipient();
        if let Err(e) = self.dispatcher.notify(recipient, &notification).await {
            tracing::error!(
                "Failed to notify user {} of like on post {}: {}",
                recipient,
                post_id,
                e
            );
        }

        Ok(like)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            ConnectionFactory, ConnectionRegistry, OutboundFrame, Post, PostContent,
            repository::{MockLikeRepository, MockPostRepository},
        },
        infrastructure::{
            InMemoryConnectionRegistry,
            dto::sse::NotificationMessage,
            repository::{InMemoryLikeRepository, InMemoryPostRepository},
        },
    };

    struct Fixture {
        posts: Arc<InMemoryPostRepository>,
        likes: Arc<InMemoryLikeRepository>,
        registry: Arc<InMemoryConnectionRegistry>,
        usecase: LikePostUseCase,
    }

    fn create_fixture() -> Fixture {
        let posts = Arc::new(InMemoryPostRepository::new());
        let likes = Arc::new(InMemoryLikeRepository::new());
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let dispatcher = Arc::new(NotificationDispatcher::new(registry.clone()));
        let usecase = LikePostUseCase::new(posts.clone(), likes.clone(), dispatcher);
        Fixture {
            posts,
            likes,
            registry,
            usecase,
        }
    }

    async fn create_post(posts: &InMemoryPostRepository, author: UserId) -> Post {
        posts
            .create_post(
                author,
                PostContent::new("hello".to_string()).unwrap(),
                Timestamp::new(0),
            )
            .await
            .unwrap()
    }

    fn user(id: i64) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn test_like_notifies_connected_author() {
        // テスト項目: 作成者が接続中なら、いいねした人と投稿を含む通知が 1 件だけ届く
        // given (前提条件):
        let f = create_fixture();
        let (alice, bob) = (user(1), user(2));
        let post = create_post(&f.posts, alice).await;
        let (connection, mut rx) = ConnectionFactory::open(alice);
        f.registry.register(connection).await.unwrap();

        // when (操作): bob が alice の投稿にいいね
        let result = f.usecase.execute(bob, post.id).await;

        // then (期待する結果):
        let like = result.unwrap();
        assert_eq!(like.user_id, bob);
        assert_eq!(like.post_id, post.id);

        let Some(OutboundFrame::Data(json)) = rx.recv().await else {
            panic!("expected a data frame");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "like");
        assert_eq!(value["postId"], post.id.value());
        assert_eq!(value["userId"], bob.value());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_like_succeeds_without_connected_author() {
        // テスト項目: 作成者が未接続でもいいねは保存され、エラーにならない
        // given (前提条件):
        let f = create_fixture();
        let post = create_post(&f.posts, user(1)).await;

        // when (操作):
        let result = f.usecase.execute(user(2), post.id).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(f.likes.count_by_post(post.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_like_after_author_stream_closed() {
        // テスト項目: 作成者のストリームが閉じた後のいいねは書き込みもエラーも起こさない
        // given (前提条件):
        let f = create_fixture();
        let alice = user(1);
        let post = create_post(&f.posts, alice).await;
        let (connection, rx) = ConnectionFactory::open(alice);
        f.registry.register(connection).await.unwrap();
        drop(rx);

        // when (操作):
        let result = f.usecase.execute(user(2), post.id).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(f.registry.lookup(alice).await.is_none());
    }

    #[tokio::test]
    async fn test_like_twice_conflicts() {
        // テスト項目: 同じユーザーが同じ投稿に 2 回いいねすると AlreadyLiked になり、件数は変わらない
        // given (前提条件):
        let f = create_fixture();
        let post = create_post(&f.posts, user(1)).await;
        f.usecase.execute(user(2), post.id).await.unwrap();

        // when (操作):
        let result = f.usecase.execute(user(2), post.id).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(LikePostError::AlreadyLiked {
                user_id: user(2),
                post_id: post.id
            })
        );
        assert_eq!(f.likes.count_by_post(post.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_like_missing_post_not_found() {
        // テスト項目: 存在しない投稿へのいいねは PostNotFound になり、いいねは作られない
        // given (前提条件):
        let f = create_fixture();
        let missing = PostId::new(404).unwrap();

        // when (操作):
        let result = f.usecase.execute(user(2), missing).await;

        // then (期待する結果):
        assert_eq!(result, Err(LikePostError::PostNotFound(missing)));
        assert_eq!(f.likes.count_by_post(missing).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_store_duplicate_maps_to_conflict() {
        // テスト項目: 存在チェック後にストアが一意性違反を返した場合も AlreadyLiked になる
        // given (前提条件):
        let (alice, bob) = (user(1), user(2));
        let post_id = PostId::new(1).unwrap();

        let mut posts = MockPostRepository::new();
        posts.expect_find_post_with_author().returning(move |id| {
            Ok(Post::new(
                id,
                alice,
                PostContent::new("hello".to_string()).unwrap(),
                Timestamp::new(0),
            ))
        });
        let mut likes = MockLikeRepository::new();
        likes
            .expect_find_like()
            .returning(|user_id, post_id| Err(RepositoryError::LikeNotFound { user_id, post_id }));
        likes
            .expect_create_like()
            .returning(|user_id, post_id, _| Err(RepositoryError::DuplicateLike { user_id, post_id }));

        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let (connection, mut rx) = ConnectionFactory::open(alice);
        registry.register(connection).await.unwrap();
        let dispatcher = Arc::new(NotificationDispatcher::new(registry));
        let usecase = LikePostUseCase::new(Arc::new(posts), Arc::new(likes), dispatcher);

        // when (操作):
        let result = usecase.execute(bob, post_id).await;

        // then (期待する結果): 通知も送られない
        assert_eq!(
            result,
            Err(LikePostError::AlreadyLiked {
                user_id: bob,
                post_id
            })
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        // テスト項目: ストアの想定外エラーは Internal になる
        // given (前提条件):
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_post_with_author()
            .returning(|_| Err(RepositoryError::Storage("connection reset".to_string())));
        let likes = MockLikeRepository::new();
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let dispatcher = Arc::new(NotificationDispatcher::new(registry));
        let usecase = LikePostUseCase::new(Arc::new(posts), Arc::new(likes), dispatcher);

        // when (操作):
        let result = usecase.execute(user(2), PostId::new(1).unwrap()).await;

        // then (期待する結果):
        assert!(matches!(result, Err(LikePostError::Internal(_))));
    }

    #[tokio::test]
    async fn test_self_like_notifies_author() {
        // テスト項目: 自分の投稿へのいいねも作成者（自分）に通知される
        // given (前提条件):
        let f = create_fixture();
        let alice = user(1);
        let post = create_post(&f.posts, alice).await;
        let (connection, mut rx) = ConnectionFactory::open(alice);
        f.registry.register(connection).await.unwrap();

        // when (操作):
        let result = f.usecase.execute(alice, post.id).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let Some(OutboundFrame::Data(json)) = rx.recv().await else {
            panic!("expected a data frame");
        };
        let message: NotificationMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(message.user_id, alice.value());
        assert_eq!(message.post_id, post.id.value());
    }
}
