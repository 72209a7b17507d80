//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use blog_common::{AppConfig, AppError, JwtService};
use blog_core::SnowflakeGenerator;
use blog_db::{
    create_pool, PgBlockedCommentRepository, PgCommentRepository, PgPostRepository,
    PgUserRepository,
};
use blog_moderation::ModerationClient;
use blog_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the Axum application with the basic middleware stack.
///
/// Used by the integration test harness; the production entry point in
/// [`run`] adds rate limiting and CORS from configuration.
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = blog_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create moderation client
    let classifier = Arc::new(ModerationClient::from_config(&config.moderation)?);

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let blocked_comment_repo = Arc::new(PgBlockedCommentRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .post_repo(post_repo)
        .comment_repo(comment_repo)
        .blocked_comment_repo(blocked_comment_repo)
        .classifier(classifier)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));
    let rate_limit = config.rate_limit.clone();
    let cors = config.cors.clone();
    let is_production = config.app.env.is_production();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application; health endpoints bypass the rate limiter
    let router = apply_middleware_with_config(create_router(), &rate_limit, &cors, is_production);
    let app = router.merge(health_routes()).with_state(state);

    // Run server
    run_server(app, addr).await
}
