//! Mapping from domain errors to HTTP responses.
//!
//! Every caller-facing auth failure collapses to 400 (malformed request
//! shape) or 401 (any credential/token/revocation failure) with a generic
//! body. The precise internal variant is logged here and goes no further:
//! clients must not be able to distinguish "wrong password" from "account
//! revoked" from "token expired".

use actix_web::HttpResponse;

use sesame_core::errors::{CredentialError, DomainError, TokenError};
use sesame_shared::types::ErrorResponse;

/// Convert a domain error into the client-facing HTTP response.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Credential(CredentialError::MissingCredentials) => {
            log::warn!("login rejected: missing credentials");
            HttpResponse::BadRequest().json(ErrorResponse::new("missing credentials"))
        }
        DomainError::Credential(_) => {
            log::warn!("login rejected: {}", error);
            HttpResponse::Unauthorized().json(ErrorResponse::new("invalid credentials"))
        }
        DomainError::Token(TokenError::Missing) => {
            log::warn!("refresh rejected: no cookie presented");
            HttpResponse::Unauthorized().json(ErrorResponse::new("no refresh token"))
        }
        DomainError::Token(_) => {
            log::warn!("token rejected: {}", error);
            HttpResponse::Unauthorized().json(ErrorResponse::new("invalid refresh token"))
        }
        DomainError::Revocation(_) => {
            log::warn!("rotation rejected: {}", error);
            HttpResponse::Unauthorized().json(ErrorResponse::new("refresh token revoked"))
        }
        DomainError::Storage(_) | DomainError::Internal { .. } => {
            log::error!("request failed: {}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new("server error"))
        }
    }
}
