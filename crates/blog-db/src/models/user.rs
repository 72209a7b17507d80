//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for user_profiles table
#[derive(Debug, Clone, FromRow)]
pub struct UserProfileModel {
    pub id: i64,
    pub user_id: i64,
    pub bio: Option<String>,
    pub picture_url: Option<String>,
}
