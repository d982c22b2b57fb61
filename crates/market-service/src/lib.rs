//! # market-service
//!
//! Application layer containing the marketplace services and response DTOs.
//!
//! Services are thin facades borrowed from a shared [`ServiceContext`]:
//!
//! ```rust
//! use market_service::{ProductService, ServiceContext, UserService};
//!
//! let ctx = ServiceContext::in_memory();
//! let seller = UserService::new(&ctx)
//!     .register("13800000000", "seller@example.com", "pw", "Seller")
//!     .unwrap();
//! let product = ProductService::new(&ctx).publish_product(&seller, "Lamp", "Desk lamp", 25.0, "Home");
//! assert_eq!(product.seller_id, seller.id);
//! ```

pub mod dto;
pub mod services;

pub use services::{
    ImService, NotificationService, ProductService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};
