//! Product entity - a listing published by a seller

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::present;
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Listing status. Every product starts `OnSale`; no operation moves it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    OnSale,
    SoldOut,
    Removed,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnSale => "ON_SALE",
            Self::SoldOut => "SOLD_OUT",
            Self::Removed => "REMOVED",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ON_SALE" => Ok(Self::OnSale),
            "SOLD_OUT" => Ok(Self::SoldOut),
            "REMOVED" => Ok(Self::Removed),
            other => Err(DomainError::InvalidProductStatus(other.to_string())),
        }
    }
}

/// Picture attached to a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub id: Snowflake,
    pub image_url: String,
}

/// Product entity. `seller_id` and `category_id` reference entities owned elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Snowflake,
    pub seller_id: Snowflake,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub status: ProductStatus,
    pub category_id: Snowflake,
    pub images: Vec<ProductImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        id: Snowflake,
        seller_id: Snowflake,
        name: String,
        description: String,
        price: f64,
        category_id: Snowflake,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            seller_id,
            name,
            description,
            price,
            status: ProductStatus::default(),
            category_id,
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append an image, keeping insertion order
    pub fn add_image(&mut self, image_id: Snowflake, image_url: String) {
        self.images.push(ProductImage {
            id: image_id,
            image_url,
        });
        self.updated_at = Utc::now();
    }

    /// Apply a partial update. Empty strings are ignored, any given price is taken as is.
    ///
    /// Returns `true` when anything changed.
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
    ) -> bool {
        let mut changed = false;

        if let Some(name) = present(name) {
            self.name = name;
            changed = true;
        }

        if let Some(description) = present(description) {
            self.description = description;
            changed = true;
        }

        if let Some(price) = price {
            self.price = price;
            changed = true;
        }

        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }

    /// Case-insensitive substring match against name or description.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product::new(
            Snowflake::new(10),
            Snowflake::new(1),
            "Mechanical Keyboard".to_string(),
            "Blue switches, RGB".to_string(),
            350.0,
            Snowflake::new(5),
        )
    }

    #[test]
    fn test_new_product_is_on_sale_without_images() {
        let product = sample_product();
        assert_eq!(product.status, ProductStatus::OnSale);
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_add_image_keeps_order() {
        let mut product = sample_product();
        product.add_image(Snowflake::new(100), "front.png".to_string());
        product.add_image(Snowflake::new(101), "back.png".to_string());
        let urls: Vec<_> = product.images.iter().map(|i| i.image_url.as_str()).collect();
        assert_eq!(urls, ["front.png", "back.png"]);
    }

    #[test]
    fn test_update_partial() {
        let mut product = sample_product();
        assert!(product.update(None, Some("Brown switches".to_string()), None));
        assert_eq!(product.name, "Mechanical Keyboard");
        assert_eq!(product.description, "Brown switches");
        assert!((product.price - 350.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_accepts_zero_price() {
        let mut product = sample_product();
        assert!(product.update(None, None, Some(0.0)));
        assert!(product.price.abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_ignores_empty_strings() {
        let mut product = sample_product();
        assert!(!product.update(Some(String::new()), Some(String::new()), None));
        assert_eq!(product.name, "Mechanical Keyboard");
    }

    #[test]
    fn test_update_applies_whitespace_strings() {
        let mut product = sample_product();
        assert!(product.update(Some("  ".to_string()), None, None));
        assert_eq!(product.name, "  ");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let product = sample_product();
        assert!(product.matches("keyb"));
        assert!(product.matches("rgb"));
        assert!(!product.matches("mouse"));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(ProductStatus::SoldOut.to_string(), "SOLD_OUT");
        assert_eq!("REMOVED".parse::<ProductStatus>().unwrap(), ProductStatus::Removed);
        assert!(matches!(
            "GONE".parse::<ProductStatus>(),
            Err(DomainError::InvalidProductStatus(s)) if s == "GONE"
        ));
    }
}
