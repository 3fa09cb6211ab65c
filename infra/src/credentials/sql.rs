//! Credential verifier backed by the users table, with an optional
//! statically configured admin account checked first.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use tracing::debug;

use sesame_core::domain::entities::user::UserIdentity;
use sesame_core::errors::{CredentialError, DomainResult, StorageError};
use sesame_core::services::credentials::CredentialVerifier;
use sesame_shared::config::AdminCredentials;

/// Verifier over `users(id, username, password)` where `password` holds a
/// bcrypt hash. The admin account, when configured, is matched before the
/// table and resolves to the fixed identity id `"admin"`.
pub struct MySqlCredentialVerifier {
    pool: MySqlPool,
    admin: Option<AdminCredentials>,
}

impl MySqlCredentialVerifier {
    /// Create a verifier without a config admin
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool, admin: None }
    }

    /// Create a verifier with an optional config admin account
    pub fn with_admin(pool: MySqlPool, admin: Option<AdminCredentials>) -> Self {
        Self { pool, admin }
    }
}

#[async_trait]
impl CredentialVerifier for MySqlCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> DomainResult<UserIdentity> {
        if let Some(admin) = &self.admin {
            if username == admin.username {
                if password == admin.password {
                    return Ok(UserIdentity::new("admin", username));
                }
                debug!("admin credential rejected");
                return Err(CredentialError::InvalidCredentials.into());
            }
        }

        let row = sqlx::query("SELECT id, username, password FROM users WHERE username = ? LIMIT 1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Database {
                message: e.to_string(),
            })?;

        let Some(row) = row else {
            return Err(CredentialError::InvalidCredentials.into());
        };

        let id: String = row.try_get("id").map_err(|e| StorageError::Database {
            message: e.to_string(),
        })?;
        let password_hash: String = row.try_get("password").map_err(|e| StorageError::Database {
            message: e.to_string(),
        })?;

        if bcrypt::verify(password, &password_hash).unwrap_or(false) {
            Ok(UserIdentity::new(id, username))
        } else {
            Err(CredentialError::InvalidCredentials.into())
        }
    }
}
