//! InMemory User Repository 実装

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RepositoryError, Timestamp, User, UserId, UserRepository, Username};

#[derive(Default)]
struct UserTable {
    last_id: i64,
    users: HashMap<UserId, User>,
}

/// インメモリ User Repository 実装
///
/// ID は 1 から順に採番します。
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(
        &self,
        username: Username,
        created_at: Timestamp,
    ) -> Result<User, RepositoryError> {
        let mut table = self.table.lock().await;
        let id = UserId::new(table.last_id + 1)
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        table.last_id = id.value();

        let user = User::new(id, username, created_at);
        table.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_user(&self, user_id: UserId) -> Result<User, RepositoryError> {
        let table = self.table.lock().await;
        table
            .users
            .get(&user_id)
            .cloned()
            .ok_or(RepositoryError::UserNotFound(user_id))
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().await;
        table
            .users
            .remove(&user_id)
            .map(|_| ())
            .ok_or(RepositoryError::UserNotFound(user_id))
    }
}
