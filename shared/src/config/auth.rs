//! Authentication configuration: signing secrets, token lifetimes and the
//! refresh-cookie attributes.

use serde::{Deserialize, Serialize};

use super::environment::Environment;
use super::ConfigError;

const DEFAULT_ACCESS_SECRET: &str = "development-secret-please-change-in-production";

/// Token signing configuration
///
/// The access and refresh tokens are signed with distinct secrets so that a
/// leaked access secret cannot be used to mint refresh tokens.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Secret for signing access tokens
    pub access_secret: String,

    /// Secret for signing refresh tokens (must differ from `access_secret`)
    pub refresh_secret: String,

    /// Access token expiry in minutes
    pub access_expiry_minutes: i64,

    /// Refresh token expiry in days
    pub refresh_expiry_days: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            access_secret: DEFAULT_ACCESS_SECRET.to_string(),
            refresh_secret: format!("{DEFAULT_ACCESS_SECRET}-refresh"),
            access_expiry_minutes: 10,
            refresh_expiry_days: 7,
        }
    }
}

impl TokenConfig {
    /// Create a new token configuration from an access secret.
    ///
    /// The refresh secret is derived by suffixing `-refresh`, matching the
    /// deployment convention when `REFRESH_TOKEN_SECRET` is not set.
    pub fn new(access_secret: impl Into<String>) -> Self {
        let access_secret = access_secret.into();
        Self {
            refresh_secret: format!("{access_secret}-refresh"),
            access_secret,
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_expiry_minutes = minutes;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_expiry_days = days;
        self
    }

    /// Access token expiry in seconds, as reported to clients in `expiresIn`
    pub fn access_expiry_seconds(&self) -> i64 {
        self.access_expiry_minutes * 60
    }

    /// Refresh token expiry in seconds
    pub fn refresh_expiry_seconds(&self) -> i64 {
        self.refresh_expiry_days * 86400
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret == DEFAULT_ACCESS_SECRET
    }

    /// Validate the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_secret.is_empty() || self.refresh_secret.is_empty() {
            return Err(ConfigError::Invalid("token secrets must be non-empty".into()));
        }
        if self.access_secret == self.refresh_secret {
            return Err(ConfigError::Invalid(
                "refresh secret must differ from access secret".into(),
            ));
        }
        if self.access_expiry_minutes <= 0 || self.refresh_expiry_days <= 0 {
            return Err(ConfigError::Invalid("token lifetimes must be positive".into()));
        }
        Ok(())
    }
}

/// Refresh-cookie attributes
///
/// The cookie is scoped to the API root so the browser only sends it to the
/// refresh/logout endpoints, and is HttpOnly so it never reaches script.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name
    pub name: String,

    /// Cookie path (API root)
    pub path: String,

    /// Cookie SameSite attribute
    pub same_site: String,

    /// Cookie HttpOnly flag
    pub http_only: bool,

    /// Cookie Secure flag (HTTPS only)
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("refresh_token"),
            path: String::from("/api"),
            same_site: String::from("Lax"),
            http_only: true,
            secure: false,
        }
    }
}

impl CookieConfig {
    /// Cookie configuration for the given environment: `Secure` is set in
    /// production only.
    pub fn for_environment(env: Environment) -> Self {
        Self {
            secure: env.is_production(),
            ..Default::default()
        }
    }
}

/// Optional statically configured admin account, checked before the user
/// store.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Token signing configuration
    pub token: TokenConfig,

    /// Refresh-cookie attributes
    #[serde(default)]
    pub cookie: CookieConfig,

    /// Statically configured admin account, if any
    #[serde(default)]
    pub admin: Option<AdminCredentials>,
}

impl AuthConfig {
    /// Create from environment variables.
    ///
    /// * `ACCESS_TOKEN_SECRET` - access signing secret
    /// * `REFRESH_TOKEN_SECRET` - refresh signing secret (default: access
    ///   secret + `-refresh`)
    /// * `ACCESS_EXPIRES_MINUTES` - access TTL in minutes (default 10)
    /// * `REFRESH_EXPIRES_DAYS` - refresh TTL in days (default 7)
    /// * `ADMIN_USERNAME` / `ADMIN_PASSWORD` - optional config admin
    pub fn from_env(environment: Environment) -> Result<Self, ConfigError> {
        let access_secret = std::env::var("ACCESS_TOKEN_SECRET")
            .unwrap_or_else(|_| DEFAULT_ACCESS_SECRET.to_string());
        let refresh_secret = std::env::var("REFRESH_TOKEN_SECRET")
            .unwrap_or_else(|_| format!("{access_secret}-refresh"));
        let access_expiry_minutes = std::env::var("ACCESS_EXPIRES_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);
        let refresh_expiry_days = std::env::var("REFRESH_EXPIRES_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7);

        let token = TokenConfig {
            access_secret,
            refresh_secret,
            access_expiry_minutes,
            refresh_expiry_days,
        };
        token.validate()?;

        let admin = match (std::env::var("ADMIN_USERNAME"), std::env::var("ADMIN_PASSWORD")) {
            (Ok(username), Ok(password)) => Some(AdminCredentials { username, password }),
            _ => None,
        };

        Ok(Self {
            token,
            cookie: CookieConfig::for_environment(environment),
            admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_default() {
        let config = TokenConfig::default();
        assert_eq!(config.access_expiry_minutes, 10);
        assert_eq!(config.refresh_expiry_days, 7);
        assert_eq!(config.access_expiry_seconds(), 600);
        assert_eq!(config.refresh_expiry_seconds(), 604800);
        assert!(config.is_using_default_secret());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_token_config_builder() {
        let config = TokenConfig::new("my-secret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);

        assert_eq!(config.access_expiry_seconds(), 1800);
        assert_eq!(config.refresh_expiry_seconds(), 14 * 86400);
        assert_eq!(config.refresh_secret, "my-secret-refresh");
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_identical_secrets_rejected() {
        let config = TokenConfig {
            access_secret: "same".to_string(),
            refresh_secret: "same".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cookie_config_per_environment() {
        let dev = CookieConfig::for_environment(Environment::Development);
        assert!(!dev.secure);
        assert!(dev.http_only);
        assert_eq!(dev.path, "/api");
        assert_eq!(dev.same_site, "Lax");

        let prod = CookieConfig::for_environment(Environment::Production);
        assert!(prod.secure);
    }
}
