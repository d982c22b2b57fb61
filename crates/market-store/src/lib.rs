//! # market-store
//!
//! Process-memory implementations of the repository and notification traits
//! defined in `market-core`.
//!
//! Each directory is a `Vec` in insertion order plus hash indexes for the keys it
//! is looked up by. Every operation takes the directory lock once, so a
//! check-then-insert (unique email, unique favorite pair, category by name) can
//! never interleave with another writer. Nothing is persisted.
//!
//! ## Usage
//!
//! ```rust
//! use market_core::traits::UserRepository;
//! use market_store::InMemoryUserRepository;
//!
//! let users = InMemoryUserRepository::new();
//! assert!(users.list().is_empty());
//! ```

pub mod notifications;
pub mod repositories;

// Re-export commonly used types
pub use notifications::{FileNotificationLog, InMemoryNotificationLog, TeeNotificationSink};
pub use repositories::{
    InMemoryAdvertisementRepository, InMemoryCategoryRepository, InMemoryFavoriteRepository,
    InMemoryMessageRepository, InMemoryProductRepository, InMemoryUserRepository,
};
