//! Comment database models
//!
//! `comments` and `blocked_comments` are parallel tables with no relationship
//! between them; one submission lands in exactly one of the two.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for blocked_comments table
#[derive(Debug, Clone, FromRow)]
pub struct BlockedCommentModel {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub content: String,
    pub blocking_reasoning: String,
    pub created_at: DateTime<Utc>,
}
