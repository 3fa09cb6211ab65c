//! Test doubles for the auth service

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::entities::user::UserIdentity;
use crate::errors::{CredentialError, DomainResult, StorageError};
use crate::services::credentials::CredentialVerifier;

/// Verifier over a fixed username -> (password, id) table.
pub struct StaticVerifier {
    users: HashMap<String, (String, String)>,
    fail_with_storage: bool,
}

impl StaticVerifier {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            fail_with_storage: false,
        }
    }

    pub fn with_user(mut self, username: &str, password: &str, id: &str) -> Self {
        self.users
            .insert(username.to_string(), (password.to_string(), id.to_string()));
        self
    }

    /// Make every verification fail as if the backing store were down.
    pub fn failing() -> Self {
        Self {
            users: HashMap::new(),
            fail_with_storage: true,
        }
    }
}

#[async_trait]
impl CredentialVerifier for StaticVerifier {
    async fn verify(&self, username: &str, password: &str) -> DomainResult<UserIdentity> {
        if self.fail_with_storage {
            return Err(StorageError::Database {
                message: "verifier store unavailable".to_string(),
            }
            .into());
        }

        match self.users.get(username) {
            Some((expected, id)) if expected == password => {
                Ok(UserIdentity::new(id.clone(), username))
            }
            _ => Err(CredentialError::InvalidCredentials.into()),
        }
    }
}
