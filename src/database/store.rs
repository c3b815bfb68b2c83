use async_trait::async_trait;

use super::manager::DatabaseError;
use super::models::{Brewery, BreweryPatch, NewBrewery, NewUser, User};

/// CRUD gateway over the `users` and `breweries` tables.
///
/// Every method is a single independent statement; nothing is transactional.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_user(&self, user: NewUser) -> Result<User, DatabaseError>;

    /// All users with the given email, oldest first.
    async fn find_users_by_email(&self, email: &str) -> Result<Vec<User>, DatabaseError>;

    /// Breweries ordered by id, restricted to `owner` when given.
    async fn list_breweries(&self, owner: Option<i64>) -> Result<Vec<Brewery>, DatabaseError>;

    async fn get_brewery(&self, id: i64) -> Result<Option<Brewery>, DatabaseError>;

    async fn insert_brewery(&self, brewery: NewBrewery) -> Result<Brewery, DatabaseError>;

    /// Returns false when no row has `id`.
    async fn update_brewery(&self, id: i64, patch: BreweryPatch) -> Result<bool, DatabaseError>;

    /// Returns false when no row has `id`.
    async fn delete_brewery(&self, id: i64) -> Result<bool, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}
