//! UseCase: 通知ストリームの切断処理
//!
//! ストリームが閉じたとき（クライアント切断・置き換え・シャットダウン）に
//! 呼ばれる。登録されているのが自分の接続である場合だけ登録を解除する。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, UserId};

/// 通知ストリーム切断のユースケース
pub struct DisconnectSubscriberUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl DisconnectSubscriberUseCase {
    /// 新しい DisconnectSubscriberUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// 接続の登録を解除する
    ///
    /// # Returns
    ///
    /// 登録を解除した場合は `true`。既に新しい接続に置き換わっていた、
    /// もしくは登録がなかった場合は `false`
    pub async fn execute(&self, user_id: UserId, connection_id: ConnectionId) -> bool {
        let removed = self.registry.unregister(user_id, connection_id).await;
        if removed {
            tracing::info!(
                "User {} disconnected and removed from registry (connection {})",
                user_id,
                connection_id
            );
        } else {
            tracing::debug!(
                "Stream {} of user {} closed; registry entry already gone or replaced",
                connection_id,
                user_id
            );
        }
        removed
    }

    /// 残りの接続数を取得
    pub async fn count_remaining_connections(&self) -> usize {
        self.registry.count().await
    }
}
