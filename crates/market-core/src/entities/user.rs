//! User entity - a registered marketplace account

use chrono::{DateTime, Utc};

use super::present;
use crate::value_objects::Snowflake;

/// Avatar assigned to every new account
pub const DEFAULT_AVATAR_URL: &str = "default_avatar.png";

/// Marketplace user. The email is the directory key, the id is the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
    pub avatar_url: String,
    pub is_online: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, offline user
    pub fn new(
        id: Snowflake,
        phone: String,
        email: String,
        password_hash: String,
        nickname: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            phone,
            email,
            password_hash,
            nickname,
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            is_online: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial profile update. Absent or empty fields are left untouched.
    ///
    /// Returns `true` when anything changed.
    pub fn update_profile(&mut self, nickname: Option<String>, avatar_url: Option<String>) -> bool {
        let mut changed = false;

        if let Some(nickname) = present(nickname) {
            self.nickname = nickname;
            changed = true;
        }

        if let Some(avatar_url) = present(avatar_url) {
            self.avatar_url = avatar_url;
            changed = true;
        }

        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }

    #[inline]
    pub fn set_online(&mut self, online: bool) {
        self.is_online = online;
    }
}
