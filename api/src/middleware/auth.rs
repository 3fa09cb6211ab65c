//! Bearer-token authentication extractor.
//!
//! Verifies the `Authorization: Bearer` access token by signature and
//! expiry and injects the caller's identity into the handler. This is the
//! integration point for any endpoint that requires a live session.

use std::future::{ready, Ready};

use actix_web::http::header::AUTHORIZATION;
use actix_web::{error::InternalError, web, Error, FromRequest, HttpRequest, HttpResponse};

use sesame_core::services::token::AccessTokenVerifier;
use sesame_shared::types::ErrorResponse;

/// Authenticated caller context extracted from a verified access token
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User id (token subject)
    pub user_id: String,
    /// Username carried in the token claims
    pub username: String,
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(extract_context(req))
    }
}

fn extract_context(req: &HttpRequest) -> Result<AuthContext, Error> {
    let Some(verifier) = req.app_data::<web::Data<AccessTokenVerifier>>() else {
        log::error!("access token verifier not registered in app data");
        return Err(unauthorized());
    };

    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(unauthorized)?;

    match verifier.verify(token) {
        Ok(claims) => Ok(AuthContext {
            user_id: claims.sub,
            username: claims.username,
        }),
        Err(err) => {
            log::warn!("access token rejected: {}", err);
            Err(unauthorized())
        }
    }
}

fn unauthorized() -> Error {
    InternalError::from_response(
        "unauthorized",
        HttpResponse::Unauthorized().json(ErrorResponse::new("invalid token")),
    )
    .into()
}
