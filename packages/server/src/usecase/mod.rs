//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod connect_subscriber;
pub mod create_post;
pub mod delete_post;
pub mod disconnect_subscriber;
pub mod error;
pub mod like_post;
pub mod notification_dispatcher;
pub mod register_user;
pub mod unlike_post;

pub use connect_subscriber::ConnectSubscriberUseCase;
pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use disconnect_subscriber::DisconnectSubscriberUseCase;
pub use error::{
    CreatePostError, DeletePostError, LikePostError, NotifyError, RegisterUserError,
    UnlikePostError,
};
pub use like_post::LikePostUseCase;
pub use notification_dispatcher::{Delivery, NotificationDispatcher};
pub use register_user::RegisterUserUseCase;
pub use unlike_post::UnlikePostUseCase;
