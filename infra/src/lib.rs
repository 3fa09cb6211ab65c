//! Infrastructure layer for the Sesame auth service
//!
//! Concrete implementations of the core interfaces:
//! - MySQL and in-memory refresh stores
//! - Credential verifiers (config admin, users table with bcrypt)

pub mod credentials;
pub mod database;

// Re-export commonly used types
pub use credentials::{MySqlCredentialVerifier, StaticCredentialVerifier};
pub use database::memory::MemoryRefreshStore;
pub use database::mysql::MySqlRefreshStore;
pub use database::{create_pool, ensure_schema};
