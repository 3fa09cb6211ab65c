//! MySQL implementation of the RefreshStore trait.
//!
//! Persists refresh records in the `refresh_records` table keyed by
//! rotation id. The consume operation is a single conditional `DELETE`
//! whose affected-row count decides the rotation winner; there is no
//! separate existence check that concurrent requests could both pass.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sesame_core::domain::entities::token::RefreshRecord;
use sesame_core::errors::StorageError;
use sesame_core::repositories::RefreshStore;

/// MySQL-backed refresh store
pub struct MySqlRefreshStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRefreshStore {
    /// Create a new MySQL refresh store
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<RefreshRecord, StorageError> {
        let rotation_id: String = row.try_get("rotation_id").map_err(db_error)?;
        let rotation_id = Uuid::parse_str(&rotation_id).map_err(|e| StorageError::Database {
            message: format!("invalid rotation id in store: {}", e),
        })?;

        Ok(RefreshRecord {
            rotation_id,
            user_id: row.try_get("user_id").map_err(db_error)?,
            expires_at: row.try_get::<DateTime<Utc>, _>("expires_at").map_err(db_error)?,
        })
    }
}

#[async_trait]
impl RefreshStore for MySqlRefreshStore {
    async fn insert(&self, record: RefreshRecord) -> Result<(), StorageError> {
        let query = r#"
            INSERT INTO refresh_records (rotation_id, user_id, expires_at)
            VALUES (?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(record.rotation_id.to_string())
            .bind(&record.user_id)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::Duplicate,
                _ => db_error(e),
            })?;

        Ok(())
    }

    async fn lookup(&self, rotation_id: Uuid) -> Result<Option<RefreshRecord>, StorageError> {
        let query = r#"
            SELECT rotation_id, user_id, expires_at
            FROM refresh_records
            WHERE rotation_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(rotation_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn consume(&self, rotation_id: Uuid) -> Result<bool, StorageError> {
        // Atomic conditional delete: exactly one concurrent caller sees an
        // affected row.
        let query = "DELETE FROM refresh_records WHERE rotation_id = ?";

        let result = sqlx::query(query)
            .bind(rotation_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self) -> Result<usize, StorageError> {
        let query = "DELETE FROM refresh_records WHERE expires_at < ?";

        let result = sqlx::query(query)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() as usize)
    }
}

fn db_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Database {
        message: e.to_string(),
    }
}
