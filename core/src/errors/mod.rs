//! Domain-specific error types and error handling.

mod types;

pub use types::{CredentialError, RevocationError, StorageError, TokenError};

use thiserror::Error;

/// Core domain errors, bridging the specific taxonomies.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Revocation(#[from] RevocationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_bridging() {
        let err: DomainError = TokenError::Expired.into();
        assert!(matches!(err, DomainError::Token(TokenError::Expired)));

        let err: DomainError = StorageError::Duplicate.into();
        assert!(matches!(err, DomainError::Storage(StorageError::Duplicate)));
    }

    #[test]
    fn test_error_messages_are_generic() {
        // No variant leaks which internal check failed beyond its class.
        assert_eq!(
            CredentialError::InvalidCredentials.to_string(),
            "invalid credentials"
        );
        assert_eq!(RevocationError::RacedAway.to_string(), "refresh record already consumed");
    }
}
