//! Business logic services
//!
//! Every service borrows the [`ServiceContext`] and is cheap to construct per call site.

pub mod context;
pub mod error;
pub mod im;
pub mod notification;
pub mod product;
pub mod user;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use im::ImService;
pub use notification::NotificationService;
pub use product::ProductService;
pub use user::UserService;
