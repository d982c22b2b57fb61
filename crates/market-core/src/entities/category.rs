//! Category entity

use crate::value_objects::Snowflake;

/// Product category. `parent_id` allows a hierarchy; nothing walks it yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Snowflake,
    pub name: String,
    pub parent_id: Option<Snowflake>,
}

impl Category {
    pub fn new(id: Snowflake, name: String) -> Self {
        Self {
            id,
            name,
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: Snowflake) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
