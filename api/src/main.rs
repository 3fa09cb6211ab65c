use std::env;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use sesame_api::app::create_app;
use sesame_api::routes::auth::AppState;
use sesame_core::services::auth::AuthService;
use sesame_core::services::token::{ExpiredRecordSweeper, SweeperConfig, TokenService, TokenServiceConfig};
use sesame_infra::{create_pool, ensure_schema, MySqlCredentialVerifier, MySqlRefreshStore};
use sesame_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Sesame auth service");

    // Load configuration once; it is immutable from here on
    let config = AppConfig::from_env()?;
    if config.auth.token.is_using_default_secret() {
        warn!("running with the default token secret - set ACCESS_TOKEN_SECRET");
    }

    // Database and schema
    let pool = create_pool(&config.database).await?;
    ensure_schema(&pool).await?;

    // Wire repositories and services
    let store = Arc::new(MySqlRefreshStore::new(pool.clone()));
    let verifier = Arc::new(MySqlCredentialVerifier::with_admin(
        pool,
        config.auth.admin.clone(),
    ));
    let tokens = Arc::new(TokenService::new(
        Arc::clone(&store),
        TokenServiceConfig::from(&config.auth.token),
    )?);
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&store),
        verifier,
        Arc::clone(&tokens),
    ));

    // Background sweep of expired refresh records
    let sweep_interval = env::var("SWEEP_INTERVAL_SECONDS")
        .unwrap_or_else(|_| "3600".to_string())
        .parse()
        .unwrap_or(3600);
    let sweeper = Arc::new(ExpiredRecordSweeper::new(
        store,
        SweeperConfig {
            interval_seconds: sweep_interval,
            enabled: true,
        },
    ));
    sweeper.start_background_task();

    let app_state = web::Data::new(AppState {
        auth_service,
        cookie: config.auth.cookie.clone(),
        refresh_max_age_seconds: config.auth.token.refresh_expiry_seconds(),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
