use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::manager::DatabaseError;
use super::models::{Brewery, BreweryPatch, NewBrewery, NewUser, User};
use super::store::Store;

/// Process-local store with auto-increment ids.
///
/// Foreign keys are not checked: a brewery may reference a user id that
/// does not exist.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    breweries: BTreeMap<i64, Brewery>,
    last_user_id: i64,
    last_brewery_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, DatabaseError> {
        let mut tables = self.tables.write().await;
        tables.last_user_id += 1;
        let row = User {
            id: tables.last_user_id,
            email: user.email,
            password: user.password_hash,
        };
        tables.users.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_users_by_email(&self, email: &str) -> Result<Vec<User>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .filter(|user| user.email == email)
            .cloned()
            .collect())
    }

    async fn list_breweries(&self, owner: Option<i64>) -> Result<Vec<Brewery>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .breweries
            .values()
            .filter(|brewery| owner.is_none() || brewery.user_id == owner)
            .cloned()
            .collect())
    }

    async fn get_brewery(&self, id: i64) -> Result<Option<Brewery>, DatabaseError> {
        Ok(self.tables.read().await.breweries.get(&id).cloned())
    }

    async fn insert_brewery(&self, brewery: NewBrewery) -> Result<Brewery, DatabaseError> {
        let mut tables = self.tables.write().await;
        tables.last_brewery_id += 1;
        let row = Brewery {
            id: tables.last_brewery_id,
            name: brewery.name,
            address: brewery.address,
            comments: brewery.comments,
            rating: None,
            user_id: brewery.user_id,
        };
        tables.breweries.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update_brewery(&self, id: i64, patch: BreweryPatch) -> Result<bool, DatabaseError> {
        let mut tables = self.tables.write().await;
        match tables.breweries.get_mut(&id) {
            Some(brewery) => {
                patch.apply_to(brewery);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_brewery(&self, id: i64) -> Result<bool, DatabaseError> {
        Ok(self.tables.write().await.breweries.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
