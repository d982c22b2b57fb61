//! In-memory implementation of FavoriteRepository

use parking_lot::RwLock;

use market_core::entities::Favorite;
use market_core::error::DomainError;
use market_core::traits::{FavoriteRepository, RepoResult};
use market_core::value_objects::Snowflake;

/// Favorites list. Pair uniqueness is checked by a scan under the write lock.
#[derive(Debug, Default)]
pub struct InMemoryFavoriteRepository {
    favorites: RwLock<Vec<Favorite>>,
}

impl InMemoryFavoriteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoriteRepository for InMemoryFavoriteRepository {
    fn add(&self, favorite: &Favorite) -> RepoResult<()> {
        let mut favorites = self.favorites.write();
        if favorites
            .iter()
            .any(|f| f.is_pair(favorite.user_id, favorite.product_id))
        {
            return Err(DomainError::AlreadyFavorited);
        }
        favorites.push(favorite.clone());
        Ok(())
    }

    fn find_by_user(&self, user_id: Snowflake) -> Vec<Favorite> {
        self.favorites
            .read()
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_unique() {
        let repo = InMemoryFavoriteRepository::new();
        let user = Snowflake::new(1);

        repo.add(&Favorite::new(user, Snowflake::new(10))).unwrap();
        assert!(matches!(
            repo.add(&Favorite::new(user, Snowflake::new(10))),
            Err(DomainError::AlreadyFavorited)
        ));
        repo.add(&Favorite::new(user, Snowflake::new(11))).unwrap();
        repo.add(&Favorite::new(Snowflake::new(2), Snowflake::new(10)))
            .unwrap();

        let products: Vec<_> = repo
            .find_by_user(user)
            .into_iter()
            .map(|f| f.product_id)
            .collect();
        assert_eq!(products, [Snowflake::new(10), Snowflake::new(11)]);
    }
}
