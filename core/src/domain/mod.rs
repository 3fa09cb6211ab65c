//! Domain entities for token-based session management

pub mod entities;

pub use entities::token::{AccessClaims, RefreshClaims, RefreshRecord, TokenPair};
pub use entities::user::UserIdentity;
