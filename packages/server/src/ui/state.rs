//! Server state shared by all handlers.

use std::{sync::Arc, time::Duration};

use crate::{
    domain::{ConnectionRegistry, LikeRepository, PostRepository, UserRepository},
    infrastructure::{
        InMemoryConnectionRegistry,
        repository::{InMemoryLikeRepository, InMemoryPostRepository, InMemoryUserRepository},
    },
    usecase::NotificationDispatcher,
};

/// Shared application state
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub likes: Arc<dyn LikeRepository>,
    /// Live notification streams, one per user
    pub registry: Arc<dyn ConnectionRegistry>,
    pub dispatcher: Arc<NotificationDispatcher>,
    /// Heartbeat interval of the notification streams
    pub keep_alive: Duration,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        likes: Arc<dyn LikeRepository>,
        registry: Arc<dyn ConnectionRegistry>,
        keep_alive: Duration,
    ) -> Self {
        let dispatcher = Arc::new(NotificationDispatcher::new(registry.clone()));
        Self {
            users,
            posts,
            likes,
            registry,
            dispatcher,
            keep_alive,
        }
    }

    /// State backed by the in-memory stores and registry
    pub fn in_memory(keep_alive: Duration) -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryLikeRepository::new()),
            Arc::new(InMemoryConnectionRegistry::new()),
            keep_alive,
        )
    }
}
