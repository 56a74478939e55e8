//! Domain factories for creating domain entities and value objects.

use tokio::sync::mpsc;

use super::{
    connection::{Connection, OutboundFrame},
    value_object::{ConnectionId, Timestamp, UserId},
};

/// Factory for generating ConnectionId instances.
///
/// Keeps id generation apart from the value object itself.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    /// Generate a new ConnectionId with a random UUID v4.
    pub fn generate() -> ConnectionId {
        ConnectionId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for opening a new [`Connection`].
pub struct ConnectionFactory;

impl ConnectionFactory {
    /// Open a connection for `user_id`.
    ///
    /// # Returns
    ///
    /// The connection handle (to be registered) and the receiving half that
    /// the transport drains into the response body.
    pub fn open(user_id: UserId) -> (Connection, mpsc::UnboundedReceiver<OutboundFrame>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let connection = Connection::new(
            ConnectionIdFactory::generate(),
            user_id,
            Timestamp::now(),
            tx,
        );
        (connection, rx)
    }
}
