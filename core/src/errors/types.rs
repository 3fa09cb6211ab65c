//! Domain-specific error types for authentication and token management
//!
//! Caller-facing messages are assigned in the presentation layer; these
//! variants only encode the internal distinction, which is logged
//! server-side and never echoed to clients.

use thiserror::Error;

/// Credential verification errors
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("missing credentials")]
    MissingCredentials,

    /// Covers both unknown-username and wrong-password so the API cannot be
    /// used as a username-enumeration oracle.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Refresh/access token errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token missing")]
    Missing,

    #[error("token payload malformed")]
    Malformed,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("token generation failed")]
    GenerationFailed,
}

/// Revocation errors: the token's signature verified but its server-side
/// record no longer authorizes a rotation.
#[derive(Error, Debug)]
pub enum RevocationError {
    #[error("no refresh record")]
    NoRecord,

    #[error("refresh record owner mismatch")]
    OwnerMismatch,

    /// The record existed at lookup but a concurrent rotation consumed it
    /// first.
    #[error("refresh record already consumed")]
    RacedAway,
}

/// Refresh-store errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("duplicate rotation id")]
    Duplicate,

    #[error("storage failure: {message}")]
    Database { message: String },
}
