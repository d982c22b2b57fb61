//! Serializable result of the demo walkthrough

use market_core::entities::AdminUser;
use market_service::dto::{
    AdvertisementResponse, CategoryResponse, MessageResponse, ProductResponse,
    PushNotificationResponse, UserResponse,
};
use serde::Serialize;

/// Permission the summary reports on
const MANAGE_PRODUCTS: &str = "manage_products";

#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub users: Vec<UserResponse>,
    pub categories: Vec<CategoryResponse>,
    pub products: Vec<ProductResponse>,
    pub search_query: String,
    pub search_results: Vec<ProductResponse>,
    /// Buyer's favorites
    pub favorites: Vec<ProductResponse>,
    pub advertisements: Vec<AdvertisementResponse>,
    /// Buyer/seller conversation, oldest first
    pub chat_history: Vec<MessageResponse>,
    pub pushes: Vec<PushNotificationResponse>,
    pub admin: AdminSummary,
}

/// Back-office account without credentials
#[derive(Debug, Serialize)]
pub struct AdminSummary {
    pub id: String,
    pub username: String,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
    pub can_manage_products: bool,
}

impl From<&AdminUser> for AdminSummary {
    fn from(admin: &AdminUser) -> Self {
        let mut permissions: Vec<String> = admin
            .roles
            .iter()
            .flat_map(|r| r.permissions.iter().map(|p| p.key.clone()))
            .collect();
        permissions.sort();
        permissions.dedup();

        Self {
            id: admin.id.to_string(),
            username: admin.username.clone(),
            roles: admin.roles.iter().map(|r| r.name.clone()).collect(),
            permissions,
            can_manage_products: admin.can(MANAGE_PRODUCTS),
        }
    }
}
