//! Application factory
//!
//! Builds the actix-web application from an [`AppState`], wiring routes
//! and middleware. Used by the binary and by the integration tests.

use actix_web::middleware::{Compress, Logger};
use actix_web::{web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::auth::{login::login, logout::logout, refresh::refresh, session::session, AppState};

use sesame_core::repositories::RefreshStore;
use sesame_core::services::credentials::CredentialVerifier;
use sesame_shared::types::ErrorResponse;

/// Create and configure the application with all dependencies
pub fn create_app<S, V>(
    app_state: web::Data<AppState<S, V>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: RefreshStore + 'static,
    V: CredentialVerifier + 'static,
{
    // The bearer extractor only needs the access verifier, not the
    // store-generic service, so it gets its own app data entry.
    let access_verifier = app_state.auth_service.tokens().access_verifier();

    App::new()
        .app_data(app_state)
        .app_data(web::Data::new(access_verifier))
        .wrap(Logger::default())
        .wrap(create_cors())
        .wrap(Compress::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Auth routes, scoped to the API root the refresh cookie is bound to
        .service(
            web::scope("/api")
                .route("/login", web::post().to(login::<S, V>))
                .route("/refresh", web::post().to(refresh::<S, V>))
                .route("/logout", web::post().to(logout::<S, V>))
                .route("/session", web::get().to(session)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "sesame-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("not found"))
}
