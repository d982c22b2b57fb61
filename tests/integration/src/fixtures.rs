//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Email no other fixture in this test binary will produce
pub fn unique_email() -> String {
    format!("user{}@example.com", unique_suffix())
}

/// Registration input
#[derive(Debug, Clone)]
pub struct NewUser {
    pub phone: String,
    pub email: String,
    pub password: String,
    pub nickname: String,
}

impl NewUser {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            phone: format!("1380000{suffix:04}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            nickname: format!("tester{suffix}"),
        }
    }

    pub fn with_nickname(nickname: &str) -> Self {
        Self {
            nickname: nickname.to_string(),
            ..Self::unique()
        }
    }
}

/// Listing input
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

impl NewProduct {
    pub fn new(name: &str, description: &str, price: f64, category: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
            category: category.to_string(),
        }
    }
}
