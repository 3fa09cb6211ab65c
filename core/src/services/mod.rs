//! Business services

pub mod auth;
pub mod credentials;
pub mod token;

pub use auth::AuthService;
pub use credentials::CredentialVerifier;
pub use token::{AccessTokenVerifier, ExpiredRecordSweeper, SweeperConfig, TokenService, TokenServiceConfig};
