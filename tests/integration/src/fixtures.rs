//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

/// Create/update post payload
#[derive(Debug, Serialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
}

impl PostPayload {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test post {suffix}"),
            content: "Some long-form thoughts about kittens.".to_string(),
        }
    }
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
}

/// Comment payload
#[derive(Debug, Serialize)]
pub struct CommentPayload {
    pub content: String,
}

impl CommentPayload {
    pub fn friendly() -> Self {
        Self {
            content: "I love kittens! They're so fluffy".to_string(),
        }
    }

    pub fn hostile() -> Self {
        Self {
            content: "Go jump off the bridge you moron".to_string(),
        }
    }
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: String,
}

/// Error body shape shared by all failure responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Daily breakdown response
#[derive(Debug, Deserialize)]
pub struct BreakdownResponse {
    pub comments: serde_json::Value,
    pub blocked_comments: serde_json::Value,
    pub total_comments_amount: u64,
    pub total_blocked_comments_amount: u64,
}
