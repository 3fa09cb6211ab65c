//! Configuration module with business-specific sub-modules
//!
//! Configuration is read from the environment exactly once at startup and
//! wrapped in an immutable [`AppConfig`] that is injected by reference into
//! the services that need it. Nothing reassigns configuration after init.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AdminCredentials, AuthConfig, CookieConfig, TokenConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Errors raised while assembling configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment the process runs in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration (secrets, TTLs, cookie attributes)
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Assemble the full configuration from environment variables.
    ///
    /// Fails if the auth section is inconsistent (e.g. the refresh secret
    /// equals the access secret).
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        Ok(Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(environment)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_defaults_are_consistent() {
        let config = AppConfig {
            environment: Environment::Development,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
        };

        assert!(!config.environment.is_production());
        assert!(config.auth.token.validate().is_ok());
    }
}
