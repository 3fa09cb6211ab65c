//! Authentication DTOs.
//!
//! Response bodies use camelCase on the wire; the refresh token never
//! appears in a body, only in the scoped cookie.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Successful login/refresh response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Signed access token, held by the client in volatile memory only
    pub access_token: String,

    /// Access token lifetime in seconds, for client renewal scheduling
    pub expires_in: i64,
}

/// `POST /api/logout` response; logout always succeeds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub ok: bool,
}

/// `GET /api/session` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    pub username: String,
}
