//! User entity - represents a registered author

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User account. The password hash is deliberately not part of the entity;
/// it lives only in the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Public profile attached to a user, created empty at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub bio: Option<String>,
    pub picture_url: Option<String>,
}

impl UserProfile {
    /// Create an empty profile for a freshly registered user
    pub fn empty(id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            id,
            user_id,
            bio: None,
            picture_url: None,
        }
    }

    /// Check if the profile has any public content
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bio.is_none() && self.picture_url.is_none()
    }
}
