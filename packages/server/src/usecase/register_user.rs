//! UseCase: ユーザー登録処理

use std::sync::Arc;

use crate::domain::{Timestamp, User, UserRepository, Username};

use super::error::RegisterUserError;

/// ユーザー登録のユースケース
pub struct RegisterUserUseCase {
    users: Arc<dyn UserRepository>,
}

impl RegisterUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, username: Username) -> Result<User, RegisterUserError> {
        let user = self
            .users
            .create_user(username, Timestamp::now())
            .await
            .map_err(|e| RegisterUserError::Internal(e.to_string()))?;
        tracing::info!("Registered user {} ({})", user.id, user.username);
        Ok(user)
    }
}
