//! InMemory ConnectionRegistry 実装
//!
//! ユーザー ID → 接続 の HashMap を 1 つの RwLock で保護します。
//! シングルプロセス前提のため、複数サーバー間での共有はできません。
//!
//! `close_all` の後は登録を受け付けません。シャットダウン開始と同時に
//! 届いたストリームが登録されて、グレースフルシャットダウンを止めないようにします。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Connection, ConnectionId, ConnectionRegistry, RegistryError, UserId};

struct Connections {
    by_user: HashMap<UserId, Connection>,
    accepting: bool,
}

impl Default for Connections {
    fn default() -> Self {
        Self {
            by_user: HashMap::new(),
            accepting: true,
        }
    }
}

/// インメモリ ConnectionRegistry 実装
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    connections: RwLock<Connections>,
}

impl InMemoryConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, connection: Connection) -> Result<Option<Connection>, RegistryError> {
        let mut connections = self.connections.write().await;
        if !connections.accepting {
            connection.close();
            return Err(RegistryError::ShuttingDown);
        }
        Ok(connections.by_user.insert(connection.user_id(), connection))
    }

    async fn unregister(&self, user_id: UserId, connection_id: ConnectionId) -> bool {
        let mut connections = self.connections.write().await;
        match connections.by_user.get(&user_id) {
            Some(current) if current.id() == connection_id => {
                connections.by_user.remove(&user_id);
                true
            }
            _ => false,
        }
    }

    async fn lookup(&self, user_id: UserId) -> Option<Connection> {
        let connections = self.connections.read().await;
        connections.by_user.get(&user_id).cloned()
    }

    async fn count(&self) -> usize {
        self.connections.read().await.by_user.len()
    }

    async fn close_all(&self) -> usize {
        let drained: Vec<Connection> = {
            let mut connections = self.connections.write().await;
            connections.accepting = false;
            connections.by_user.drain().map(|(_, connection)| connection).collect()
        };
        for connection in &drained {
            connection.close();
        }
        drained.len()
    }
}
