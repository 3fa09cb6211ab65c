//! Credential verifier implementations.
//!
//! The core treats credential storage as an external collaborator behind
//! the [`CredentialVerifier`](sesame_core::services::credentials::CredentialVerifier)
//! trait; these are the concrete verifiers the service is wired with.

pub mod sql;
pub mod static_users;

pub use sql::MySqlCredentialVerifier;
pub use static_users::StaticCredentialVerifier;
