//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use eventhub_common::{AppConfig, AppError, AppResult, JwtService};
use eventhub_core::SnowflakeGenerator;
use eventhub_db::{
    create_pool, run_migrations, PgEventRepository, PgHealthCheck, PgRegistrationRepository,
    PgTokenRepository, PgUserRepository,
};
use eventhub_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the application with the base middleware stack (no rate limiting)
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router().merge(health_routes()));
    router.with_state(state)
}

/// Build the application with CORS and rate limiting from configuration.
/// Health routes are mounted outside the rate limiter.
pub fn create_app_with_config(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    router.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let token_repo = Arc::new(PgTokenRepository::new(pool.clone()));
    match token_repo.purge_expired().await {
        Ok(purged) => info!(purged, "Expired tokens purged"),
        Err(e) => warn!(error = %e, "Failed to purge expired tokens"),
    }

    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.worker_id));

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .token_repo(token_repo)
        .event_repo(Arc::new(PgEventRepository::new(pool.clone())))
        .registration_repo(Arc::new(PgRegistrationRepository::new(pool.clone())))
        .health_check(Arc::new(PgHealthCheck::new(pool)))
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid bind address: {e}")))?;

    info!(base_url = %config.app.base_url, "Starting {}", config.app.name);

    let state = create_app_state(config).await?;
    let app = create_app_with_config(state);

    run_server(app, addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
