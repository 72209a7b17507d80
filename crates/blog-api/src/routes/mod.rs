//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{analytics, auth, comments, health, posts, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(post_routes())
        .merge(analytics_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", delete(users::delete_account))
        .route("/users/@me/profile", get(users::get_my_profile))
        .route("/users/:user_id/profile", get(users::get_profile))
}

/// Post and comment routes
fn post_routes() -> Router<AppState> {
    Router::new()
        // Post CRUD
        .route("/posts", get(posts::list_posts))
        .route("/posts", post(posts::create_post))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id", put(posts::update_post))
        .route("/posts/:post_id", delete(posts::delete_post))
        // Post comments (moderated)
        .route("/posts/:post_id/comments", get(comments::list_comments))
        .route("/posts/:post_id/comments", post(comments::create_comment))
        .route(
            "/posts/:post_id/comments/:comment_id",
            put(comments::update_comment),
        )
        .route(
            "/posts/:post_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
}

/// Analytics routes
fn analytics_routes() -> Router<AppState> {
    Router::new().route(
        "/comments-daily-breakdown",
        get(analytics::daily_breakdown),
    )
}
