//! Advertisement entity

use crate::value_objects::Snowflake;

/// Banner shown at a named placement such as `homepage_banner`.
/// Several ads may share a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    pub id: Snowflake,
    pub title: String,
    pub image_url: String,
    pub target_url: String,
    pub position: String,
}

impl Advertisement {
    pub fn new(
        id: Snowflake,
        title: String,
        image_url: String,
        target_url: String,
        position: String,
    ) -> Self {
        Self {
            id,
            title,
            image_url,
            target_url,
            position,
        }
    }
}
