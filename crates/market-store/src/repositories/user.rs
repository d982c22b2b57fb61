//! In-memory implementation of UserRepository

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::instrument;

use market_core::entities::User;
use market_core::error::DomainError;
use market_core::traits::{RepoResult, UserRepository};
use market_core::value_objects::Snowflake;

#[derive(Debug, Default)]
struct UserDirectory {
    users: Vec<User>,
    by_id: HashMap<Snowflake, usize>,
    by_email: HashMap<String, usize>,
}

impl UserDirectory {
    fn slot_mut(&mut self, id: Snowflake) -> RepoResult<&mut User> {
        let idx = *self.by_id.get(&id).ok_or(DomainError::UserNotFound(id))?;
        Ok(&mut self.users[idx])
    }
}

/// User directory keyed by id, with a secondary index on email
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<UserDirectory>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_id(&self, id: Snowflake) -> Option<User> {
        let dir = self.inner.read();
        dir.by_id.get(&id).map(|&idx| dir.users[idx].clone())
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        let dir = self.inner.read();
        dir.by_email.get(email).map(|&idx| dir.users[idx].clone())
    }

    #[instrument(level = "trace", skip(self, user), fields(user_id = %user.id))]
    fn create(&self, user: &User) -> RepoResult<()> {
        let mut dir = self.inner.write();
        if dir.by_email.contains_key(&user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let idx = dir.users.len();
        dir.by_id.insert(user.id, idx);
        dir.by_email.insert(user.email.clone(), idx);
        dir.users.push(user.clone());
        Ok(())
    }

    #[instrument(level = "trace", skip(self, user), fields(user_id = %user.id))]
    fn update(&self, user: &User) -> RepoResult<()> {
        let mut dir = self.inner.write();
        let stored = dir.slot_mut(user.id)?;
        // The email is the directory key; it is not editable through updates.
        let email = std::mem::take(&mut stored.email);
        *stored = User {
            email,
            ..user.clone()
        };
        Ok(())
    }

    fn set_online(&self, id: Snowflake, online: bool) -> RepoResult<User> {
        let mut dir = self.inner.write();
        let stored = dir.slot_mut(id)?;
        stored.set_online(online);
        Ok(stored.clone())
    }

    fn list(&self) -> Vec<User> {
        self.inner.read().users.clone()
    }
}
