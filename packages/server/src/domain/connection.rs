//! Live notification connection.
//!
//! A [`Connection`] is the writable end of one user's event stream. The
//! readable end (an `UnboundedReceiver<OutboundFrame>`) is owned by the HTTP
//! response body; when the client goes away the body is dropped, the channel
//! closes and every further `send` fails.

use tokio::sync::mpsc::UnboundedSender;

use super::{
    error::TransportError,
    value_object::{ConnectionId, Timestamp, UserId},
};

/// Frame queued for the response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundFrame {
    /// Single-line JSON payload, written as one event
    Data(String),
    /// End the stream
    Close,
}

/// Handle to one open event stream.
///
/// Cloning is cheap; all clones write to the same stream.
#[derive(Debug, Clone)]
pub struct Connection {
    id: ConnectionId,
    user_id: UserId,
    connected_at: Timestamp,
    sender: UnboundedSender<OutboundFrame>,
}

impl Connection {
    pub fn new(
        id: ConnectionId,
        user_id: UserId,
        connected_at: Timestamp,
        sender: UnboundedSender<OutboundFrame>,
    ) -> Self {
        Self {
            id,
            user_id,
            connected_at,
            sender,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn connected_at(&self) -> Timestamp {
        self.connected_at
    }

    /// Queue a payload on the stream. Never blocks.
    ///
    /// # Errors
    ///
    /// `TransportError::Closed` if the stream has gone away.
    pub fn send(&self, payload: String) -> Result<(), TransportError> {
        self.sender
            .send(OutboundFrame::Data(payload))
            .map_err(|_| TransportError::Closed)
    }

    /// Ask the stream to end. No-op if it already has.
    pub fn close(&self) {
        let _ = self.sender.send(OutboundFrame::Close);
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Wait until the stream has gone away.
    pub async fn closed(&self) {
        self.sender.closed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory::ConnectionFactory;

    #[test]
    fn test_send_after_receiver_dropped_fails() {
        // テスト項目: 受信側が破棄された接続への送信は Closed エラーになる
        // given (前提条件):
        let (connection, rx) = ConnectionFactory::open(UserId::new(1).unwrap());
        drop(rx);

        // when (操作):
        let result = connection.send("{}".to_string());

        // then (期待する結果):
        assert_eq!(result, Err(TransportError::Closed));
        assert!(connection.is_closed());
    }

    #[test]
    fn test_close_queues_close_frame() {
        // テスト項目: close() はストリームに終了フレームを送る
        // given (前提条件):
        let (connection, mut rx) = ConnectionFactory::open(UserId::new(1).unwrap());

        // when (操作):
        connection.send("a".to_string()).unwrap();
        connection.close();

        // then (期待する結果): 送信順が保たれる
        assert_eq!(rx.try_recv().unwrap(), OutboundFrame::Data("a".to_string()));
        assert_eq!(rx.try_recv().unwrap(), OutboundFrame::Close);
    }

    #[tokio::test]
    async fn test_closed_resolves_when_receiver_dropped() {
        // テスト項目: 受信側が破棄されると closed() が完了する
        // given (前提条件):
        let (connection, rx) = ConnectionFactory::open(UserId::new(1).unwrap());

        // when (操作):
        drop(rx);

        // then (期待する結果):
        tokio::time::timeout(std::time::Duration::from_secs(1), connection.closed())
            .await
            .expect("closed() should resolve after the receiver is dropped");
    }

    #[test]
    fn test_connected_at_is_open_time() {
        // テスト項目: 接続時刻は接続を開いた時点の時刻になる
        // given (前提条件):
        let before = Timestamp::now();

        // when (操作):
        let (connection, _rx) = ConnectionFactory::open(UserId::new(1).unwrap());

        // then (期待する結果):
        assert!(connection.connected_at() >= before);
        assert!(connection.connected_at() <= Timestamp::now());
    }
}
