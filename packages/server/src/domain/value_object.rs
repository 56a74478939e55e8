//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::error::ValueObjectError;

/// Maximum username length (in characters)
pub const USERNAME_MAX_LENGTH: usize = 50;

/// Maximum post content length (in characters)
pub const POST_CONTENT_MAX_LENGTH: usize = 10000;

/// User identifier value object.
///
/// Positive integer assigned by the user store. Also the key of the
/// connection registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Create a new UserId.
    ///
    /// # Arguments
    ///
    /// * `id` - The user identifier, must be positive
    ///
    /// # Returns
    ///
    /// A Result containing the UserId or an error if validation fails
    pub fn new(id: i64) -> Result<Self, ValueObjectError> {
        if id <= 0 {
            return Err(ValueObjectError::UserIdNotPositive(id));
        }
        Ok(Self(id))
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = ValueObjectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PostId(i64);

impl PostId {
    /// Create a new PostId.
    ///
    /// # Arguments
    ///
    /// * `id` - The post identifier, must be positive
    ///
    /// # Returns
    ///
    /// A Result containing the PostId or an error if validation fails
    pub fn new(id: i64) -> Result<Self, ValueObjectError> {
        if id <= 0 {
            return Err(ValueObjectError::PostIdNotPositive(id));
        }
        Ok(Self(id))
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for PostId {
    type Error = ValueObjectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostId> for i64 {
    fn from(id: PostId) -> Self {
        id.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection identifier value object.
///
/// Distinguishes two streams opened by the same user, so that the
/// disconnect of an old stream cannot evict a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Create a ConnectionId from a UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Username value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a new Username. Surrounding whitespace is trimmed.
    ///
    /// # Arguments
    ///
    /// * `name` - The username string
    ///
    /// # Returns
    ///
    /// A Result containing the Username or an error if validation fails
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ValueObjectError::UsernameEmpty);
        }
        let len = name.chars().count();
        if len > USERNAME_MAX_LENGTH {
            return Err(ValueObjectError::UsernameTooLong {
                max: USERNAME_MAX_LENGTH,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post content value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostContent(String);

impl PostContent {
    /// Create a new PostContent.
    ///
    /// # Arguments
    ///
    /// * `content` - The post body
    ///
    /// # Returns
    ///
    /// A Result containing the PostContent or an error if validation fails
    pub fn new(content: String) -> Result<Self, ValueObjectError> {
        if content.trim().is_empty() {
            return Err(ValueObjectError::PostContentEmpty);
        }
        let len = content.chars().count();
        if len > POST_CONTENT_MAX_LENGTH {
            return Err(ValueObjectError::PostContentTooLong {
                max: POST_CONTENT_MAX_LENGTH,
                actual: len,
            });
        }
        Ok(Self(content))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PostContent {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (JST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current time.
    pub fn now() -> Self {
        Self(iine_shared::time::get_jst_timestamp())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
