//! Connection registry trait.
//!
//! Maps each user to at most one live [`Connection`]. Built once at startup
//! and shared (behind `Arc`) by the stream handlers and the notification
//! dispatcher.

use async_trait::async_trait;

use super::{Connection, ConnectionId, RegistryError, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Insert the connection under its user id, replacing any previous one.
    ///
    /// Returns the replaced connection. It is not closed here; closing it is
    /// up to the caller.
    ///
    /// # Errors
    ///
    /// `RegistryError::ShuttingDown` once `close_all` has run. The rejected
    /// connection is closed before returning.
    async fn register(&self, connection: Connection) -> Result<Option<Connection>, RegistryError>;

    /// Remove the entry for `user_id` only if it is still `connection_id`.
    ///
    /// Returns `false` when nothing was removed (absent, or a newer
    /// connection has taken the slot).
    async fn unregister(&self, user_id: UserId, connection_id: ConnectionId) -> bool;

    /// Current connection for `user_id`, if any. Does no I/O.
    async fn lookup(&self, user_id: UserId) -> Option<Connection>;

    /// Number of registered connections
    async fn count(&self) -> usize;

    /// Remove and close every connection, and refuse later registrations.
    /// Returns how many were closed.
    async fn close_all(&self) -> usize;
}
