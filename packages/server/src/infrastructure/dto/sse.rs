//! Payloads pushed over the notification stream.
//!
//! Field names are part of the wire contract (`type`, `message`, `postId`,
//! `userId`), hence camelCase here unlike the HTTP DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::Notification;

/// Event class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationType {
    Like,
}

/// Tagged notification payload, one per event frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMessage {
    pub r#type: NotificationType,
    pub message: String,
    pub post_id: i64,
    /// The user who triggered the event
    pub user_id: i64,
}

impl From<&Notification> for NotificationMessage {
    fn from(notification: &Notification) -> Self {
        match notification {
            Notification::Like(event) => Self {
                r#type: NotificationType::Like,
                message: format!(
                    "User {} liked your post {}",
                    event.actor_user_id, event.post_id
                ),
                post_id: event.post_id.value(),
                user_id: event.actor_user_id.value(),
            },
        }
    }
}
