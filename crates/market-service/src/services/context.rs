//! Service context - dependency container for services
//!
//! Holds every repository, the notification sink and the ID generator.

use std::sync::Arc;

use market_common::AppConfig;
use market_core::traits::{
    AdvertisementRepository, CategoryRepository, FavoriteRepository, MessageRepository,
    NotificationSink, ProductRepository, UserRepository,
};
use market_core::{Snowflake, SnowflakeGenerator};
use market_store::{
    FileNotificationLog, InMemoryAdvertisementRepository, InMemoryCategoryRepository,
    InMemoryFavoriteRepository, InMemoryMessageRepository, InMemoryNotificationLog,
    InMemoryProductRepository, InMemoryUserRepository, TeeNotificationSink,
};
use tracing::info;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap and every clone shares the same directories, so a
/// context is one marketplace instance.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    product_repo: Arc<dyn ProductRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,
    advertisement_repo: Arc<dyn AdvertisementRepository>,
    message_repo: Arc<dyn MessageRepository>,

    // Push delivery
    notification_sink: Arc<dyn NotificationSink>,

    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        product_repo: Arc<dyn ProductRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        advertisement_repo: Arc<dyn AdvertisementRepository>,
        message_repo: Arc<dyn MessageRepository>,
        notification_sink: Arc<dyn NotificationSink>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            product_repo,
            category_repo,
            favorite_repo,
            advertisement_repo,
            message_repo,
            notification_sink,
            snowflake_generator,
        }
    }

    /// Fresh, empty marketplace whose pushes go to an in-memory log
    pub fn in_memory() -> Self {
        Self::in_memory_with_sink(Arc::new(InMemoryNotificationLog::new()))
    }

    /// Fresh, empty marketplace with the given push sink
    pub fn in_memory_with_sink(sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_stores(sink, SnowflakeGenerator::default())
    }

    /// Build a marketplace from loaded configuration, keeping pushes in memory
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the worker ID is out of range
    pub fn from_config(config: &AppConfig) -> ServiceResult<Self> {
        Self::from_config_with_sink(config, Arc::new(InMemoryNotificationLog::new()))
    }

    /// Build a marketplace from loaded configuration with the given push sink.
    /// When `notification.log_file` is set, pushes are appended to that file as well.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the worker ID is out of range
    pub fn from_config_with_sink(
        config: &AppConfig,
        sink: Arc<dyn NotificationSink>,
    ) -> ServiceResult<Self> {
        let worker_id = config.snowflake.worker_id;
        if worker_id > Snowflake::MAX_WORKER_ID {
            return Err(ServiceError::validation(format!(
                "worker_id must be at most {}, got {worker_id}",
                Snowflake::MAX_WORKER_ID
            )));
        }

        let sink: Arc<dyn NotificationSink> = match &config.notification.log_file {
            Some(path) => {
                info!(path = %path.display(), "Appending push notifications to file");
                Arc::new(TeeNotificationSink::new(vec![
                    sink,
                    Arc::new(FileNotificationLog::new(path.clone())) as Arc<dyn NotificationSink>,
                ]))
            }
            None => sink,
        };

        Ok(Self::with_stores(sink, SnowflakeGenerator::new(worker_id)))
    }

    fn with_stores(sink: Arc<dyn NotificationSink>, generator: SnowflakeGenerator) -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(InMemoryFavoriteRepository::new()),
            Arc::new(InMemoryAdvertisementRepository::new()),
            Arc::new(InMemoryMessageRepository::new()),
            sink,
            Arc::new(generator),
        )
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the product repository
    pub fn product_repo(&self) -> &dyn ProductRepository {
        self.product_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the favorite repository
    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    /// Get the advertisement repository
    pub fn advertisement_repo(&self) -> &dyn AdvertisementRepository {
        self.advertisement_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    // === Notifications ===

    pub fn notification_sink(&self) -> &dyn NotificationSink {
        self.notification_sink.as_ref()
    }

    // === IDs ===

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("notification_sink", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom dependencies
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    product_repo: Option<Arc<dyn ProductRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    favorite_repo: Option<Arc<dyn FavoriteRepository>>,
    advertisement_repo: Option<Arc<dyn AdvertisementRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    notification_sink: Option<Arc<dyn NotificationSink>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn product_repo(mut self, repo: Arc<dyn ProductRepository>) -> Self {
        self.product_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn favorite_repo(mut self, repo: Arc<dyn FavoriteRepository>) -> Self {
        self.favorite_repo = Some(repo);
        self
    }

    pub fn advertisement_repo(mut self, repo: Arc<dyn AdvertisementRepository>) -> Self {
        self.advertisement_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn notification_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.notification_sink = Some(sink);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.product_repo.ok_or_else(|| ServiceError::validation("product_repo is required"))?,
            self.category_repo.ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            self.favorite_repo.ok_or_else(|| ServiceError::validation("favorite_repo is required"))?,
            self.advertisement_repo
                .ok_or_else(|| ServiceError::validation("advertisement_repo is required"))?,
            self.message_repo.ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.notification_sink
                .ok_or_else(|| ServiceError::validation("notification_sink is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
