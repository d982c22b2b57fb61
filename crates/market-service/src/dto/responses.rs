//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use market_core::{ContentType, ProductStatus};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// User profile. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub phone: String,
    pub email: String,
    pub nickname: String,
    pub avatar_url: String,
    pub is_online: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Catalog Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductImageResponse {
    pub id: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub seller_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub status: ProductStatus,
    pub category_id: String,
    pub images: Vec<ProductImageResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvertisementResponse {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub target_url: String,
    pub position: String,
}

// ============================================================================
// Message Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub content_type: ContentType,
    pub sent_at: DateTime<Utc>,
}

/// Push notification as handed to the sink
#[derive(Debug, Clone, Serialize)]
pub struct PushNotificationResponse {
    pub user_id: String,
    pub content: String,
    pub requested_at: DateTime<Utc>,
}
