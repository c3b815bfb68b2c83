use anyhow::Context;

use crate::config::AppConfig;
use crate::database::DatabaseManager;

pub async fn handle(config: AppConfig) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to the database")?;
    DatabaseManager::migrate(&pool)
        .await
        .context("failed to apply migrations")?;
    pool.close().await;
    Ok(())
}
