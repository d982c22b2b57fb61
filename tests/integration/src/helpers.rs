//! Test helpers for integration tests
//!
//! Provides a marketplace wired with an inspectable push log.

use std::sync::Arc;

use market_common::AppConfig;
use market_core::entities::{Product, User};
use market_service::{ImService, ProductService, ServiceContext, ServiceResult, UserService};
use market_store::InMemoryNotificationLog;

use crate::fixtures::{NewProduct, NewUser};

/// In-memory marketplace with access to every push it sent
pub struct TestMarket {
    pub ctx: ServiceContext,
    pub pushes: Arc<InMemoryNotificationLog>,
}

impl TestMarket {
    /// Fresh marketplace with default configuration
    pub fn start() -> Self {
        let pushes = Arc::new(InMemoryNotificationLog::new());
        let ctx = ServiceContext::in_memory_with_sink(pushes.clone());
        Self { ctx, pushes }
    }

    /// Fresh marketplace built from `config`
    pub fn start_with_config(config: &AppConfig) -> ServiceResult<Self> {
        let pushes = Arc::new(InMemoryNotificationLog::new());
        let ctx = ServiceContext::from_config_with_sink(config, pushes.clone())?;
        Ok(Self { ctx, pushes })
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(&self.ctx)
    }

    pub fn products(&self) -> ProductService<'_> {
        ProductService::new(&self.ctx)
    }

    pub fn im(&self) -> ImService<'_> {
        ImService::new(&self.ctx)
    }

    /// Register `user`, panicking if the email is taken
    pub fn register(&self, user: &NewUser) -> User {
        self.users()
            .register(&user.phone, &user.email, &user.password, &user.nickname)
            .unwrap_or_else(|| panic!("{} should be free", user.email))
    }

    /// Register and log in `user`, returning the online account
    pub fn register_online(&self, user: &NewUser) -> User {
        self.register(user);
        self.users()
            .login(&user.email, &user.password)
            .unwrap_or_else(|| panic!("{} should be able to log in", user.email))
    }

    pub fn publish(&self, seller: &User, product: &NewProduct) -> Product {
        self.products().publish_product(
            seller,
            &product.name,
            &product.description,
            product.price,
            &product.category,
        )
    }
}
