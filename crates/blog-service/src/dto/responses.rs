//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the bearer token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Public profile response
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Published comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Blocked comment record, exposed only inside the daily breakdown report.
/// It is never returned to the client that submitted the comment.
#[derive(Debug, Clone, Serialize)]
pub struct BlockedCommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub blocking_reasoning: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Analytics Responses
// ============================================================================

/// Records for one calendar day plus their count
#[derive(Debug, Clone, Serialize)]
pub struct DailyBucket<T> {
    pub items: Vec<T>,
    pub comments_amount: usize,
}

/// Daily breakdown report over a date range.
///
/// Both per-day maps are always present; an empty range yields empty maps
/// and zero totals, not absent fields. `BTreeMap` keeps the date keys in
/// deterministic order.
#[derive(Debug, Serialize)]
pub struct DailyBreakdownResponse {
    pub comments: BTreeMap<NaiveDate, DailyBucket<CommentResponse>>,
    pub blocked_comments: BTreeMap<NaiveDate, DailyBucket<BlockedCommentResponse>>,
    pub total_comments_amount: u64,
    pub total_blocked_comments_amount: u64,
}

// ============================================================================
// Common Responses
// ============================================================================

/// Confirmation body for delete operations
#[derive(Debug, Serialize)]
pub struct ConfirmationResponse {
    pub message: String,
}

impl ConfirmationResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Basic health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            ready: database,
            database,
        }
    }
}
