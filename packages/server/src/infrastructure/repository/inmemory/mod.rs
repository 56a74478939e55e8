//! InMemory Repository 実装
//!
//! HashMap をインメモリ DB として使用します。プロセス終了でデータは消えます。

mod like;
mod post;
mod user;

pub use like::InMemoryLikeRepository;
pub use post::InMemoryPostRepository;
pub use user::InMemoryUserRepository;
