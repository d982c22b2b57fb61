//! Data transfer objects for rendered output
//!
//! Response DTOs are the serialized view of domain entities. Mappers convert
//! entities into them.

pub mod mappers;
pub mod responses;

pub use responses::{
    AdvertisementResponse, CategoryResponse, MessageResponse, ProductImageResponse,
    ProductResponse, PushNotificationResponse, UserResponse,
};
