//! Domain events that may be pushed to a user.

use super::value_object::{PostId, UserId};

/// `actor_user_id` liked `post_id`, written by `recipient_user_id`.
///
/// Built right after the like is stored and handed straight to the
/// dispatcher. Never stored or queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeEvent {
    pub actor_user_id: UserId,
    pub post_id: PostId,
    pub recipient_user_id: UserId,
}

/// A notification for a single user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Like(LikeEvent),
}

impl Notification {
    /// The user this notification is addressed to
    pub fn recipient(&self) -> UserId {
        match self {
            Notification::Like(event) => event.recipient_user_id,
        }
    }
}
