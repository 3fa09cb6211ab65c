//! Database module - MySQL implementations using SQLx

pub mod memory;
pub mod mysql;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

use sesame_shared::config::DatabaseConfig;

/// Create the MySQL connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    tracing::info!(max_connections = config.max_connections, "creating database connection pool");

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await
}

/// Create the refresh-record table if it does not exist yet.
///
/// The rotation id is the primary key, which provides the unique index the
/// lookup/consume operations rely on.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS refresh_records (
            rotation_id CHAR(36) NOT NULL PRIMARY KEY,
            user_id VARCHAR(255) NOT NULL,
            expires_at DATETIME NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
