//! Fixed-table credential verifier for tests and database-less setups.

use async_trait::async_trait;
use std::collections::HashMap;

use sesame_core::domain::entities::user::UserIdentity;
use sesame_core::errors::{CredentialError, DomainResult};
use sesame_core::services::credentials::CredentialVerifier;

/// Verifier over a fixed in-memory username table.
#[derive(Default)]
pub struct StaticCredentialVerifier {
    users: HashMap<String, (String, String)>,
}

impl StaticCredentialVerifier {
    /// Create an empty verifier (rejects everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user
    pub fn with_user(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        self.users.insert(username.into(), (password.into(), id.into()));
        self
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> DomainResult<UserIdentity> {
        match self.users.get(username) {
            Some((expected, id)) if expected == password => {
                Ok(UserIdentity::new(id.clone(), username))
            }
            _ => Err(CredentialError::InvalidCredentials.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sesame_core::errors::DomainError;

    #[tokio::test]
    async fn test_known_user_resolves() {
        let verifier = StaticCredentialVerifier::new().with_user("alice", "secret", "user-1");

        let identity = verifier.verify("alice", "secret").await.unwrap();
        assert_eq!(identity.id, "user-1");
        assert_eq!(identity.username, "alice");
    }

    #[tokio::test]
    async fn test_rejections_are_uniform() {
        let verifier = StaticCredentialVerifier::new().with_user("alice", "secret", "user-1");

        for (username, password) in [("alice", "wrong"), ("bob", "secret")] {
            let err = verifier.verify(username, password).await.unwrap_err();
            assert!(matches!(
                err,
                DomainError::Credential(CredentialError::InvalidCredentials)
            ));
        }
    }
}
