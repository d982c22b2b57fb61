//! Repository implementations
//!
//! In-memory implementations of the repository traits defined in market-core.
//! Each repository owns the directory for one domain entity.

mod advertisement;
mod category;
mod favorite;
mod message;
mod product;
mod user;

pub use advertisement::InMemoryAdvertisementRepository;
pub use category::InMemoryCategoryRepository;
pub use favorite::InMemoryFavoriteRepository;
pub use message::InMemoryMessageRepository;
pub use product::InMemoryProductRepository;
pub use user::InMemoryUserRepository;
