use async_trait::async_trait;
use sqlx::PgPool;

use super::manager::DatabaseError;
use super::models::{Brewery, BreweryPatch, NewBrewery, NewUser, User};
use super::store::Store;

const BREWERY_COLUMNS: &str = "id, name, address, comments, rating, user_id";

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, DatabaseError> {
        let row = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password) VALUES ($1, $2) RETURNING id, email, password",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_users_by_email(&self, email: &str) -> Result<Vec<User>, DatabaseError> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT id, email, password FROM users WHERE email = $1 ORDER BY id",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_breweries(&self, owner: Option<i64>) -> Result<Vec<Brewery>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM breweries WHERE ($1::BIGINT IS NULL OR user_id = $1) ORDER BY id",
            BREWERY_COLUMNS
        );
        let rows = sqlx::query_as::<_, Brewery>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_brewery(&self, id: i64) -> Result<Option<Brewery>, DatabaseError> {
        let sql = format!("SELECT {} FROM breweries WHERE id = $1", BREWERY_COLUMNS);
        let row = sqlx::query_as::<_, Brewery>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_brewery(&self, brewery: NewBrewery) -> Result<Brewery, DatabaseError> {
        let sql = format!(
            "INSERT INTO breweries (name, address, comments, user_id) VALUES ($1, $2, $3, $4) RETURNING {}",
            BREWERY_COLUMNS
        );
        let row = sqlx::query_as::<_, Brewery>(&sql)
            .bind(&brewery.name)
            .bind(&brewery.address)
            .bind(&brewery.comments)
            .bind(brewery.user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_brewery(&self, id: i64, patch: BreweryPatch) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE breweries SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                comments = COALESCE($4, comments),
                rating = COALESCE($5, rating)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.address)
        .bind(patch.comments)
        .bind(patch.rating.map(|r| r.as_str()))
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_brewery(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM breweries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
