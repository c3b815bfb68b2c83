use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use super::memory::MemoryStore;
use super::postgres::PgStore;
use super::store::Store;
use crate::config::DatabaseConfig;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Pool construction and schema migration
pub struct DatabaseManager;

impl DatabaseManager {
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let url = config
            .url
            .as_deref()
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(url)
            .await?;

        info!("Created database pool ({} max connections)", config.max_connections);
        Ok(pool)
    }

    /// Apply the embedded `migrations/` directory.
    pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations").run(pool).await?;
        info!("Database migrations applied");
        Ok(())
    }
}

/// Open the configured store: Postgres when a URL is set, otherwise memory.
pub async fn open_store(config: &DatabaseConfig) -> Result<Arc<dyn Store>, DatabaseError> {
    if config.url.is_none() {
        warn!("No database URL configured; using the in-memory store (data is lost on exit)");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let pool = DatabaseManager::connect(config).await?;
    DatabaseManager::migrate(&pool).await?;
    Ok(Arc::new(PgStore::new(pool)))
}
