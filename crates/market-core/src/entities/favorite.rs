//! Favorite entity - membership of a product in a user's favorites

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub user_id: Snowflake,
    pub product_id: Snowflake,
    pub added_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: Snowflake, product_id: Snowflake) -> Self {
        Self {
            user_id,
            product_id,
            added_at: Utc::now(),
        }
    }

    /// Whether this record links the given pair
    #[inline]
    pub fn is_pair(&self, user_id: Snowflake, product_id: Snowflake) -> bool {
        self.user_id == user_id && self.product_id == product_id
    }
}
