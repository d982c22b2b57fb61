//! Ports - storage and delivery interfaces implemented outside the domain

mod notifications;
mod repositories;

pub use notifications::NotificationSink;
pub use repositories::{
    AdvertisementRepository, CategoryRepository, FavoriteRepository, MessageRepository,
    ProductRepository, RepoResult, UserRepository,
};
