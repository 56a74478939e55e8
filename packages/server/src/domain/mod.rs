//! Domain layer.
//!
//! Business types and the interfaces (repositories, connection registry)
//! that the use cases depend on. Independent of DTOs and infrastructure.

pub mod connection;
pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use connection::{Connection, OutboundFrame};
pub use entity::{Like, Post, User};
pub use error::{RegistryError, RepositoryError, TransportError, ValueObjectError};
pub use event::{LikeEvent, Notification};
pub use factory::{ConnectionFactory, ConnectionIdFactory};
pub use registry::ConnectionRegistry;
pub use repository::{LikeRepository, PostRepository, UserRepository};
pub use value_object::{ConnectionId, PostContent, PostId, Timestamp, UserId, Username};
