//! User service
//!
//! Registration, login/logout and profile lookups.

use market_common::{hash_password, verify_password};
use market_core::entities::User;
use market_core::Snowflake;
use tracing::{debug, info, instrument, warn};

use super::context::ServiceContext;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account. Returns `None` if the email is already registered.
    #[instrument(skip(self, phone, password, nickname))]
    pub fn register(&self, phone: &str, email: &str, password: &str, nickname: &str) -> Option<User> {
        let user = User::new(
            self.ctx.generate_id(),
            phone.to_string(),
            email.to_string(),
            hash_password(password),
            nickname.to_string(),
        );

        match self.ctx.user_repo().create(&user) {
            Ok(()) => {
                info!(user_id = %user.id, "User registered successfully");
                Some(user)
            }
            Err(e) => {
                warn!(email = %email, error = %e, "Registration rejected");
                None
            }
        }
    }

    /// Log in by email and password. On success the stored user is marked online.
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &str) -> Option<User> {
        let Some(user) = self.ctx.user_repo().find_by_email(email) else {
            warn!(email = %email, "Login failed: user not found");
            return None;
        };

        if !verify_password(password, &user.password_hash) {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return None;
        }

        match self.ctx.user_repo().set_online(user.id, true) {
            Ok(user) => {
                info!(user_id = %user.id, "User logged in successfully");
                Some(user)
            }
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "Login failed");
                None
            }
        }
    }

    /// Mark the stored user offline. `None` or an unknown user is a no-op.
    ///
    /// Copies of the user held by the caller keep their old flag.
    #[instrument(skip(self, user), fields(user_id = user.map(|u| u.id.into_inner())))]
    pub fn logout(&self, user: Option<&User>) {
        let Some(user) = user else {
            return;
        };

        match self.ctx.user_repo().set_online(user.id, false) {
            Ok(_) => info!(user_id = %user.id, "User logged out successfully"),
            Err(e) => debug!(user_id = %user.id, error = %e, "Logout ignored"),
        }
    }

    /// Look up a user by ID
    pub fn find_user_by_id(&self, user_id: Snowflake) -> Option<User> {
        self.ctx.user_repo().find_by_id(user_id)
    }

    /// All users in registration order
    pub fn get_all_users(&self) -> Vec<User> {
        self.ctx.user_repo().list()
    }

    /// Change nickname and/or avatar. Absent or empty values leave the field as is.
    ///
    /// Returns the stored user, or `None` if the ID is unknown.
    #[instrument(skip(self, nickname, avatar_url))]
    pub fn update_profile(
        &self,
        user_id: Snowflake,
        nickname: Option<String>,
        avatar_url: Option<String>,
    ) -> Option<User> {
        let mut user = self.ctx.user_repo().find_by_id(user_id)?;

        if user.update_profile(nickname, avatar_url) {
            if let Err(e) = self.ctx.user_repo().update(&user) {
                warn!(user_id = %user_id, error = %e, "Profile update failed");
                return None;
            }
            info!(user_id = %user_id, "User profile updated");
        }

        Some(user)
    }
}
