//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
