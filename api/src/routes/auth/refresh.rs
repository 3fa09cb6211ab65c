//! Handler for POST /api/refresh

use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::AuthResponse;
use crate::handlers::error::handle_domain_error;

use sesame_core::errors::{DomainError, TokenError};
use sesame_core::repositories::RefreshStore;
use sesame_core::services::credentials::CredentialVerifier;

use super::{refresh_cookie, removal_cookie, AppState};

/// Rotate the refresh cookie and return a fresh access token.
///
/// Cookie-only: no request body. At most one of several concurrent
/// requests bearing the same cookie succeeds; the rest observe 401.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "accessToken": "eyJ...", "expiresIn": 600 }
/// ```
/// plus a rotated `refresh_token` cookie.
///
/// ## Errors
/// - 401 Unauthorized: missing, invalid, expired or revoked refresh token.
///   Revoked tokens additionally get the cookie cleared.
/// - 500 Internal Server Error: refresh store unreachable
pub async fn refresh<S, V>(req: HttpRequest, state: web::Data<AppState<S, V>>) -> HttpResponse
where
    S: RefreshStore + 'static,
    V: CredentialVerifier + 'static,
{
    let Some(cookie) = req.cookie(&state.cookie.name) else {
        return handle_domain_error(&DomainError::Token(TokenError::Missing));
    };

    match state.auth_service.refresh(cookie.value()).await {
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
        Err(error) => {
            let mut response = handle_domain_error(&error);
            if matches!(error, DomainError::Revocation(_)) {
                // The cookie can never become valid again; drop it so the
                // client stops presenting it.
                if let Err(err) = response.add_cookie(&removal_cookie(&state.cookie)) {
                    log::error!("failed to attach removal cookie: {}", err);
                }
            }
            response
        }
    }
}
