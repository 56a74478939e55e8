//! UseCase: 通知配信
//!
//! 宛先ユーザーの接続をレジストリから引き、あればイベントを 1 フレーム書き込む。
//! 接続がなければ破棄する（オフライン向けのキューや再送はしない）。
//!
//! 書き込みはチャンネルへの enqueue のみで、呼び出し元をブロックしない。
//! 書き込みに失敗した接続はその場で登録解除する（暗黙の切断）。

use std::sync::Arc;

use crate::{
    domain::{ConnectionRegistry, Notification, UserId},
    infrastructure::dto::sse::NotificationMessage,
};

use super::error::NotifyError;

/// 配信結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// 接続に書き込んだ
    Delivered,
    /// 宛先の接続がなかった
    NoSubscriber,
    /// 接続が既に閉じていたため破棄し、登録解除した
    Dropped,
}

/// 通知ディスパッチャ
pub struct NotificationDispatcher {
    registry: Arc<dyn ConnectionRegistry>,
}

impl NotificationDispatcher {
    /// 新しい NotificationDispatcher を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// `recipient` に通知を送る
    ///
    /// # Returns
    ///
    /// * `Ok(Delivery)` - 配信結果（接続がない・閉じている場合もエラーではない）
    /// * `Err(NotifyError)` - ペイロードのシリアライズに失敗
    pub async fn notify(
        &self,
        recipient: UserId,
        notification: &Notification,
    ) -> Result<Delivery, NotifyError> {
        let Some(connection) = self.registry.lookup(recipient).await else {
            tracing::debug!("No live stream for user {}, notification dropped", recipient);
            return Ok(Delivery::NoSubscriber);
        };

        let payload = serde_json::to_string(&NotificationMessage::from(notification))
            .map_err(|e| NotifyError::Serialization(e.to_string()))?;

        match connection.send(payload) {
            Ok(()) => {
                tracing::info!(
                    "Pushed notification to user {} (connection {})",
                    recipient,
                    connection.id()
                );
                Ok(Delivery::Delivered)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to push notification to user {} (connection {}): {}",
                    recipient,
                    connection.id(),
                    e
                );
                self.registry.unregister(recipient, connection.id()).await;
                Ok(Delivery::Dropped)
            }
        }
    }
}
