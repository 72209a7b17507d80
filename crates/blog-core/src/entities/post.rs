//! Post entity - represents a blog post

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Blog post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(id: Snowflake, author_id: Snowflake, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the given user authored this post
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Apply a partial update. Each mutable field is listed explicitly here;
    /// a field set to `Some` is applied even when the new value is empty.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }
}

/// The set of post fields that may be changed after creation
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    /// Check if the change set touches nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
