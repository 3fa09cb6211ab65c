//! Handler for GET /api/session

use actix_web::HttpResponse;

use crate::dto::SessionResponse;
use crate::middleware::auth::AuthContext;

/// Introspect the current session from a bearer access token.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "id": "admin", "username": "admin" }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing, invalid or expired access token
pub async fn session(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse {
        id: auth.user_id,
        username: auth.username,
    })
}
