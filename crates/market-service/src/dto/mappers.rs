//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use market_core::entities::{
    Advertisement, Category, Message, Product, ProductImage, PushNotification, User,
};

use super::responses::{
    AdvertisementResponse, CategoryResponse, MessageResponse, ProductImageResponse,
    ProductResponse, PushNotificationResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            nickname: user.nickname.clone(),
            avatar_url: user.avatar_url.clone(),
            is_online: user.is_online,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Catalog Mappers
// ============================================================================

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            parent_id: category.parent_id.map(|id| id.to_string()),
        }
    }
}

impl From<&ProductImage> for ProductImageResponse {
    fn from(image: &ProductImage) -> Self {
        Self {
            id: image.id.to_string(),
            image_url: image.image_url.clone(),
        }
    }
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            seller_id: product.seller_id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            status: product.status,
            category_id: product.category_id.to_string(),
            images: product.images.iter().map(ProductImageResponse::from).collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self::from(&product)
    }
}

impl From<&Advertisement> for AdvertisementResponse {
    fn from(ad: &Advertisement) -> Self {
        Self {
            id: ad.id.to_string(),
            title: ad.title.clone(),
            image_url: ad.image_url.clone(),
            target_url: ad.target_url.clone(),
            position: ad.position.clone(),
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            sender_id: message.sender_id.to_string(),
            receiver_id: message.receiver_id.to_string(),
            content: message.content.clone(),
            content_type: message.content_type,
            sent_at: message.sent_at,
        }
    }
}

impl From<&PushNotification> for PushNotificationResponse {
    fn from(push: &PushNotification) -> Self {
        Self {
            user_id: push.user_id.to_string(),
            content: push.content.clone(),
            requested_at: push.requested_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use market_core::{ContentType, Snowflake};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new(
            Snowflake::new(42),
            "13800000000".into(),
            "a@x.com".into(),
            "hashed_pw".into(),
            "Alice".into(),
        );
        let value = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(value["id"], json!("42"));
        assert_eq!(value["nickname"], json!("Alice"));
        assert_eq!(value["is_online"], json!(false));
        assert!(value.get("password_hash").is_none());
    }

    #[test]
    fn test_product_response() {
        let mut product = Product::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "Widget".into(),
            "desc".into(),
            10.0,
            Snowflake::new(3),
        );
        product.add_image(Snowflake::new(4), "front.png".into());
        let value = serde_json::to_value(ProductResponse::from(&product)).unwrap();

        assert_eq!(value["seller_id"], json!("2"));
        assert_eq!(value["status"], json!("ON_SALE"));
        assert_eq!(value["price"], json!(10.0));
        assert_eq!(value["images"][0]["image_url"], json!("front.png"));
    }

    #[test]
    fn test_category_response_omits_missing_parent() {
        let root = Category::new(Snowflake::new(1), "Tools".into());
        let child = Category::new(Snowflake::new(2), "Saws".into()).with_parent(root.id);

        let root_json = serde_json::to_value(CategoryResponse::from(&root)).unwrap();
        let child_json = serde_json::to_value(CategoryResponse::from(&child)).unwrap();

        assert!(root_json.get("parent_id").is_none());
        assert_eq!(child_json["parent_id"], json!("1"));
    }

    #[test]
    fn test_message_response() {
        let message = Message::with_content_type(
            Snowflake::new(9),
            Snowflake::new(1),
            Snowflake::new(2),
            "pic.png".into(),
            ContentType::Image,
        );
        let value = serde_json::to_value(MessageResponse::from(&message)).unwrap();

        assert_eq!(value["receiver_id"], json!("2"));
        assert_eq!(value["content_type"], json!("IMAGE"));
    }
}
