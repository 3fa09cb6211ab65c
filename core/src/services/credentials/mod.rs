//! Credential verification interface.

use async_trait::async_trait;

use crate::domain::entities::user::UserIdentity;
use crate::errors::DomainResult;

/// Opaque password verifier: given username and password, resolves a user
/// identity or fails.
///
/// Implementations live in the infrastructure layer (config admin, users
/// table with bcrypt). Any rejection should surface as
/// [`CredentialError::InvalidCredentials`](crate::errors::CredentialError)
/// so callers cannot distinguish unknown-username from wrong-password;
/// only genuine storage failures use
/// [`StorageError`](crate::errors::StorageError).
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Resolve credentials to an identity.
    async fn verify(&self, username: &str, password: &str) -> DomainResult<UserIdentity>;
}
