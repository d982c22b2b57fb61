//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the store layer provides the
//! implementation. Every directory keeps insertion order, which is the order
//! listings, favorites and users are presented in.

use crate::entities::{Advertisement, Category, Favorite, Message, Product, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

pub trait UserRepository: Send + Sync {
    /// Find user by ID
    fn find_by_id(&self, id: Snowflake) -> Option<User>;

    /// Find user by email
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Insert a new user. Fails with `EmailAlreadyExists` without touching the
    /// directory when the email is taken.
    fn create(&self, user: &User) -> RepoResult<()>;

    /// Replace a stored user
    fn update(&self, user: &User) -> RepoResult<()>;

    /// Flip the online flag and return the updated user
    fn set_online(&self, id: Snowflake, online: bool) -> RepoResult<User>;

    /// All users in registration order
    fn list(&self) -> Vec<User>;
}

// ============================================================================
// Product Repository
// ============================================================================

pub trait ProductRepository: Send + Sync {
    fn find_by_id(&self, id: Snowflake) -> Option<Product>;

    /// Products published by `seller_id`, in publication order
    fn find_by_seller(&self, seller_id: Snowflake) -> Vec<Product>;

    fn create(&self, product: &Product);

    fn update(&self, product: &Product) -> RepoResult<()>;

    /// All products in publication order
    fn list(&self) -> Vec<Product>;
}

// ============================================================================
// Category Repository
// ============================================================================

pub trait CategoryRepository: Send + Sync {
    /// Return the stored category named `candidate.name`, inserting `candidate`
    /// if there is none. Lookup and insert are a single step.
    fn get_or_insert(&self, candidate: Category) -> Category;

    /// All categories in creation order
    fn list(&self) -> Vec<Category>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

pub trait FavoriteRepository: Send + Sync {
    /// Insert a favorite. Fails with `AlreadyFavorited` if the pair exists.
    fn add(&self, favorite: &Favorite) -> RepoResult<()>;

    /// Favorites of `user_id`, in the order they were added
    fn find_by_user(&self, user_id: Snowflake) -> Vec<Favorite>;
}

// ============================================================================
// Advertisement Repository
// ============================================================================

pub trait AdvertisementRepository: Send + Sync {
    fn create(&self, ad: &Advertisement);

    /// Ads whose position equals `position` exactly
    fn find_by_position(&self, position: &str) -> Vec<Advertisement>;
}

// ============================================================================
// Message Repository
// ============================================================================

pub trait MessageRepository: Send + Sync {
    /// Append to the message log
    fn create(&self, message: &Message);

    /// Messages exchanged between `a` and `b` in either direction, in log order
    fn find_between(&self, a: Snowflake, b: Snowflake) -> Vec<Message>;

    /// Number of messages in the log
    fn count(&self) -> usize;
}
