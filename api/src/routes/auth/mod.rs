//! Authentication route handlers
//!
//! - `POST /api/login` - credential login, sets the refresh cookie
//! - `POST /api/refresh` - cookie-driven rotation
//! - `POST /api/logout` - session teardown, always succeeds
//! - `GET /api/session` - bearer-token introspection

pub mod login;
pub mod logout;
pub mod refresh;
pub mod session;

use std::sync::Arc;

use actix_web::cookie::{time, Cookie, SameSite};

use sesame_core::repositories::RefreshStore;
use sesame_core::services::auth::AuthService;
use sesame_core::services::credentials::CredentialVerifier;
use sesame_shared::config::CookieConfig;

/// Shared application state injected into the auth handlers
pub struct AppState<S, V>
where
    S: RefreshStore,
    V: CredentialVerifier,
{
    /// Authentication service driving the session lifecycle
    pub auth_service: Arc<AuthService<S, V>>,

    /// Refresh-cookie attributes
    pub cookie: CookieConfig,

    /// Refresh-cookie Max-Age in seconds (the refresh TTL)
    pub refresh_max_age_seconds: i64,
}

/// Build the refresh cookie carrying a newly issued refresh token.
pub(crate) fn refresh_cookie(
    config: &CookieConfig,
    value: String,
    max_age_seconds: i64,
) -> Cookie<'static> {
    Cookie::build(config.name.clone(), value)
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(parse_same_site(&config.same_site))
        .path(config.path.clone())
        .max_age(time::Duration::seconds(max_age_seconds))
        .finish()
}

/// Build an expired cookie that removes the refresh cookie client-side.
pub(crate) fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    Cookie::build(config.name.clone(), "")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(parse_same_site(&config.same_site))
        .path(config.path.clone())
        .max_age(time::Duration::ZERO)
        .finish()
}

fn parse_same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}
