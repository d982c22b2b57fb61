//! Demo catalogue: two accounts, three listings, one banner and a back-office admin

use market_common::hash_password;
use market_core::entities::{AdminUser, Advertisement, Permission, Product, Role, User};
use market_service::{ProductService, ServiceContext, ServiceError, ServiceResult, UserService};
use tracing::{info, instrument};

pub const SELLER_EMAIL: &str = "seller@market.local";
pub const SELLER_PASSWORD: &str = "seller-pw";
pub const BUYER_EMAIL: &str = "buyer@market.local";
pub const BUYER_PASSWORD: &str = "buyer-pw";

/// Ad placement used by the demo banner
pub const HOMEPAGE_BANNER: &str = "homepage_banner";

/// Everything `seed_demo_data` created
#[derive(Debug, Clone)]
pub struct DemoSeed {
    pub seller: User,
    pub buyer: User,
    /// In publication order
    pub products: Vec<Product>,
    pub advertisement: Advertisement,
    pub admin: AdminUser,
}

/// Populate `ctx` with the demo catalogue
///
/// # Errors
/// Returns `ServiceError::Conflict` if a demo account is already registered,
/// `ServiceError::NotFound` if a freshly published product cannot be found again
#[instrument(skip(ctx))]
pub fn seed_demo_data(ctx: &ServiceContext) -> ServiceResult<DemoSeed> {
    let users = UserService::new(ctx);
    let catalog = ProductService::new(ctx);

    let seller = users
        .register("13800000001", SELLER_EMAIL, SELLER_PASSWORD, "Seller")
        .ok_or_else(|| ServiceError::conflict(format!("{SELLER_EMAIL} is already registered")))?;
    let buyer = users
        .register("13800000002", BUYER_EMAIL, BUYER_PASSWORD, "Buyer")
        .ok_or_else(|| ServiceError::conflict(format!("{BUYER_EMAIL} is already registered")))?;
    users.update_profile(seller.id, None, Some("seller_avatar.png".to_string()));

    let keyboard = catalog.publish_product(
        &seller,
        "Mechanical Keyboard",
        "Hot-swappable switches, RGB backlight",
        350.0,
        "Electronics",
    );
    let keyboard = catalog
        .add_product_image(keyboard.id, "keyboard_front.png")
        .ok_or_else(|| ServiceError::not_found("Product", keyboard.id.to_string()))?;

    let mouse = catalog.publish_product(
        &seller,
        "Wireless Mouse",
        "Ergonomic, 2.4GHz receiver",
        120.0,
        "Electronics",
    );

    let lamp = catalog.publish_product(&seller, "Desk Lamp", "LED, adjustable arm", 80.0, "Home");
    let lamp = catalog
        .update_product(lamp.id, None, None, Some(69.9))
        .ok_or_else(|| ServiceError::not_found("Product", lamp.id.to_string()))?;

    let advertisement = catalog.add_advertisement(
        "Spring Sale",
        "spring_sale.png",
        "/promotions/spring",
        HOMEPAGE_BANNER,
    );

    let admin = seed_admin(ctx);

    info!(
        seller_id = %seller.id,
        buyer_id = %buyer.id,
        admin = %admin.username,
        "Demo accounts created"
    );

    Ok(DemoSeed {
        seller,
        buyer,
        products: vec![keyboard, mouse, lamp],
        advertisement,
        admin,
    })
}

fn seed_admin(ctx: &ServiceContext) -> AdminUser {
    let mut moderator = Role::new(ctx.generate_id(), "moderator".to_string());
    moderator.add_permission(Permission::new(ctx.generate_id(), "manage_products".to_string()));
    moderator.add_permission(Permission::new(ctx.generate_id(), "manage_users".to_string()));

    let mut admin = AdminUser::new(ctx.generate_id(), "ops".to_string(), hash_password("ops-pw"));
    admin.assign_role(moderator);
    admin
}
