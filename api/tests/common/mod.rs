//! Shared setup for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::web;

use sesame_api::routes::auth::AppState;
use sesame_core::services::auth::AuthService;
use sesame_core::services::token::{TokenService, TokenServiceConfig};
use sesame_infra::{MemoryRefreshStore, StaticCredentialVerifier};
use sesame_shared::config::CookieConfig;

pub type TestState = AppState<MemoryRefreshStore, StaticCredentialVerifier>;

/// Build app state over an in-memory store with a single known user
/// (`admin` / `hunter2`). The store handle is returned separately so tests
/// can inspect and manipulate revocation state.
pub fn test_state() -> (Arc<MemoryRefreshStore>, web::Data<TestState>) {
    let store = Arc::new(MemoryRefreshStore::new());
    let verifier = Arc::new(StaticCredentialVerifier::new().with_user("admin", "hunter2", "admin"));

    let config = TokenServiceConfig {
        access_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        access_expiry_minutes: 10,
        refresh_expiry_days: 7,
    };
    let tokens = Arc::new(TokenService::new(Arc::clone(&store), config).unwrap());
    let auth_service = Arc::new(AuthService::new(Arc::clone(&store), verifier, tokens));

    let state = web::Data::new(AppState {
        auth_service,
        cookie: CookieConfig::default(),
        refresh_max_age_seconds: 7 * 86400,
    });

    (store, state)
}

/// JSON body for a valid login
pub fn valid_login() -> serde_json::Value {
    serde_json::json!({ "username": "admin", "password": "hunter2" })
}

/// Extract the refresh cookie from a response, re-wrapped for sending on a
/// follow-up request.
pub fn refresh_cookie_from<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "refresh_token")
        .expect("refresh cookie set");
    Cookie::new("refresh_token", cookie.value().to_string())
}
