//! Configuration for the token service

use sesame_shared::config::TokenConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing access tokens
    pub access_secret: String,
    /// Secret for signing refresh tokens, distinct from the access secret
    pub refresh_secret: String,
    /// Access token expiry in minutes
    pub access_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "development-secret-please-change-in-production".to_string(),
            refresh_secret: "development-secret-please-change-in-production-refresh".to_string(),
            access_expiry_minutes: 10,
            refresh_expiry_days: 7,
        }
    }
}

impl TokenServiceConfig {
    /// Access token expiry in seconds, reported to clients as `expiresIn`
    pub fn access_expiry_seconds(&self) -> i64 {
        self.access_expiry_minutes * 60
    }
}

impl From<&TokenConfig> for TokenServiceConfig {
    fn from(config: &TokenConfig) -> Self {
        Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            access_expiry_minutes: config.access_expiry_minutes,
            refresh_expiry_days: config.refresh_expiry_days,
        }
    }
}
