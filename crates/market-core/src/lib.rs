//! # market-core
//!
//! Domain layer containing entities, value objects, repository traits and domain errors.
//! This crate has no knowledge of how the directories are stored or how pushes are delivered.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AdminUser, Advertisement, Category, ContentType, Favorite, Message, Permission, Product,
    ProductImage, ProductStatus, PushNotification, Role, User, DEFAULT_AVATAR_URL,
};
pub use error::DomainError;
pub use traits::{
    AdvertisementRepository, CategoryRepository, FavoriteRepository, MessageRepository,
    NotificationSink, ProductRepository, RepoResult, UserRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
