//! Handler for POST /api/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{AuthResponse, LoginRequest};
use crate::handlers::error::handle_domain_error;

use sesame_core::repositories::RefreshStore;
use sesame_core::services::credentials::CredentialVerifier;
use sesame_shared::types::ErrorResponse;

use super::{refresh_cookie, AppState};

/// Authenticate credentials and start a session.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "accessToken": "eyJ...", "expiresIn": 600 }
/// ```
/// plus the `refresh_token` cookie (HttpOnly, SameSite=Lax, scoped to the
/// API root).
///
/// ## Errors
/// - 400 Bad Request: missing username or password
/// - 401 Unauthorized: invalid credentials (uniform for unknown username
///   and wrong password)
/// - 500 Internal Server Error: credential store unreachable
pub async fn login<S, V>(
    state: web::Data<AppState<S, V>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    S: RefreshStore + 'static,
    V: CredentialVerifier + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("missing credentials"));
    }

    match state.auth_service.login(&request.username, &request.password).await {
        Ok(pair) => {
            let cookie = refresh_cookie(
                &state.cookie,
                pair.refresh_token,
                state.refresh_max_age_seconds,
            );

            HttpResponse::Ok().cookie(cookie).json(AuthResponse {
                access_token: pair.access_token,
                expires_in: pair.expires_in,
            })
        }
        Err(error) => handle_domain_error(&error),
    }
}
