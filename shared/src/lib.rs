//! Shared utilities and common types for the Sesame auth service
//!
//! This crate provides functionality used across the server crates:
//! - Configuration types, loaded once at startup from the environment
//! - Common response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AdminCredentials, AppConfig, AuthConfig, ConfigError, CookieConfig, DatabaseConfig,
    Environment, ServerConfig, TokenConfig,
};
pub use types::ErrorResponse;
