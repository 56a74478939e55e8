//! UseCase: 通知ストリームの接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectSubscriberUseCase::execute() メソッド
//! - 接続の登録と、同一ユーザーの古い接続の置き換え
//!
//! ### なぜこのテストが必要か
//! - 1 ユーザーにつき接続は最大 1 つ、という不変条件を保証する
//! - 置き換えられた古い接続が閉じられ、孤立したストリームが残らないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規接続
//! - エッジケース：同じユーザーの再接続（古い接続は閉じられる）
//! - 異常系：シャットダウン開始後の接続（登録されず閉じられる）

use std::sync::Arc;

use crate::domain::{Connection, ConnectionRegistry, RegistryError};

/// 通知ストリーム接続のユースケース
pub struct ConnectSubscriberUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl ConnectSubscriberUseCase {
    /// 新しい ConnectSubscriberUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// 接続を登録する
    ///
    /// 同じユーザーの既存接続があれば置き換え、古い接続は閉じる。
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 古い接続を置き換えた
    /// * `Ok(false)` - 新規接続
    /// * `Err(RegistryError::ShuttingDown)` - シャットダウン中のため拒否（接続は閉じられる）
    pub async fn execute(&self, connection: Connection) -> Result<bool, RegistryError> {
        let user_id = connection.user_id();
        let connection_id = connection.id();

        let replaced = self.registry.register(connection).await.inspect_err(|e| {
            tracing::warn!("Rejected stream for user {}: {}", user_id, e);
        })?;
        match replaced {
            Some(previous) => {
                tracing::info!(
                    "User {} reconnected: connection {} replaces {}",
                    user_id,
                    connection_id,
                    previous.id()
                );
                previous.close();
                Ok(true)
            }
            None => {
                tracing::info!("User {} connected (connection {})", user_id, connection_id);
                Ok(false)
            }
        }
    }
}
