//! Handler for POST /api/logout

use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::LogoutResponse;

use sesame_core::repositories::RefreshStore;
use sesame_core::services::credentials::CredentialVerifier;

use super::{removal_cookie, AppState};

/// End the session.
///
/// Best-effort: the refresh record is consumed if the cookie is present
/// and verifies, but the response is 200 `{"ok": true}` regardless - a
/// client must always be able to log out, even against an unreachable
/// store.
pub async fn logout<S, V>(req: HttpRequest, state: web::Data<AppState<S, V>>) -> HttpResponse
where
    S: RefreshStore + 'static,
    V: CredentialVerifier + 'static,
{
    let cookie = req.cookie(&state.cookie.name);
    state
        .auth_service
        .logout(cookie.as_ref().map(|c| c.value()))
        .await;

    HttpResponse::Ok()
        .cookie(removal_cookie(&state.cookie))
        .json(LogoutResponse { ok: true })
}
