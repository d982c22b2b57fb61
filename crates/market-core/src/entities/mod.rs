//! Domain entities - core business objects

mod admin;
mod advertisement;
mod category;
mod favorite;
mod message;
mod notification;
mod product;
mod user;

pub use admin::{AdminUser, Permission, Role};
pub use advertisement::Advertisement;
pub use category::Category;
pub use favorite::Favorite;
pub use message::{ContentType, Message};
pub use notification::PushNotification;
pub use product::{Product, ProductImage, ProductStatus};
pub use user::{User, DEFAULT_AVATAR_URL};

/// Treats `None` and empty strings alike when applying partial updates
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
