//! # market-demo
//!
//! Seeds a marketplace, walks through a buyer/seller conversation and collects
//! the results into a serializable [`DemoReport`].

pub mod report;
pub mod seed;

use std::sync::Arc;

use market_common::{AppConfig, AppResult};
use market_core::ContentType;
use market_service::dto::{
    AdvertisementResponse, CategoryResponse, MessageResponse, ProductResponse,
    PushNotificationResponse, UserResponse,
};
use market_service::{ImService, ProductService, ServiceContext, ServiceError, UserService};
use market_store::InMemoryNotificationLog;
use tracing::{info, instrument};

pub use report::{AdminSummary, DemoReport};
pub use seed::{
    seed_demo_data, DemoSeed, BUYER_EMAIL, BUYER_PASSWORD, HOMEPAGE_BANNER, SELLER_EMAIL,
    SELLER_PASSWORD,
};

/// Query used for the search step of the walkthrough
pub const DEMO_SEARCH_QUERY: &str = "key";

/// Build a marketplace from `config`, seed it and run the walkthrough
///
/// # Errors
/// Fails if the configuration cannot back a context or a scripted step finds
/// nothing to act on
#[instrument(skip(config), fields(app = %config.app.name))]
pub fn run(config: &AppConfig) -> AppResult<DemoReport> {
    let pushes = Arc::new(InMemoryNotificationLog::new());
    let ctx = ServiceContext::from_config_with_sink(config, pushes.clone())?;

    let seed = seed_demo_data(&ctx)?;
    info!(products = seed.products.len(), "Demo catalogue seeded");

    walkthrough(&ctx, &seed, &pushes)
}

fn walkthrough(
    ctx: &ServiceContext,
    seed: &DemoSeed,
    pushes: &InMemoryNotificationLog,
) -> AppResult<DemoReport> {
    let users = UserService::new(ctx);
    let products = ProductService::new(ctx);
    let im = ImService::new(ctx);

    let buyer = users
        .login(BUYER_EMAIL, BUYER_PASSWORD)
        .ok_or_else(|| ServiceError::not_found("User", BUYER_EMAIL))?;

    let search_results = products.search_products(DEMO_SEARCH_QUERY);
    for product in &search_results {
        products.add_to_favorites(&buyer, product);
    }

    // Seller is still offline here
    im.receive_message(&buyer, seed.seller.id, "Hi, is the keyboard still available?")
        .ok_or_else(|| ServiceError::not_found("User", seed.seller.id.to_string()))?;

    let seller = users
        .login(SELLER_EMAIL, SELLER_PASSWORD)
        .ok_or_else(|| ServiceError::not_found("User", SELLER_EMAIL))?;
    im.receive_message(&seller, buyer.id, "Yes, it is. Here is a photo.")
        .ok_or_else(|| ServiceError::not_found("User", buyer.id.to_string()))?;
    im.send_message(&seller, buyer.id, "keyboard_photo.png", ContentType::Image)
        .ok_or_else(|| ServiceError::not_found("User", buyer.id.to_string()))?;

    let chat_history = im.get_chat_history(&buyer, &seller);
    let favorites = products.get_user_favorites(&buyer);

    users.logout(Some(&seller));
    users.logout(Some(&buyer));
    info!(messages = im.message_count(), pushes = pushes.len(), "Walkthrough finished");

    Ok(DemoReport {
        users: users.get_all_users().iter().map(UserResponse::from).collect(),
        categories: products.get_categories().iter().map(CategoryResponse::from).collect(),
        products: products.search_products("").iter().map(ProductResponse::from).collect(),
        search_query: DEMO_SEARCH_QUERY.to_string(),
        search_results: search_results.iter().map(ProductResponse::from).collect(),
        favorites: favorites.iter().map(ProductResponse::from).collect(),
        advertisements: products
            .get_advertisements_by_position(HOMEPAGE_BANNER)
            .iter()
            .map(AdvertisementResponse::from)
            .collect(),
        chat_history: chat_history.iter().map(MessageResponse::from).collect(),
        pushes: pushes.pushes().iter().map(PushNotificationResponse::from).collect(),
        admin: AdminSummary::from(&seed.admin),
    })
}
