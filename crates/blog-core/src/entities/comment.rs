//! Comment entities - published comments and their blocked counterparts
//!
//! `Comment` and `BlockedComment` are parallel, mutually exclusive
//! destinations for one submission: a submission ends up in exactly one of
//! the two tables, never both. `CommentAdmission` is the tagged outcome the
//! moderation gate returns internally.

use chrono::{DateTime, Utc};

use crate::value_objects::{ModerationVerdict, Snowflake};

/// Published comment on a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment with a server-assigned creation timestamp
    pub fn new(id: Snowflake, post_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        Self {
            id,
            post_id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check if the given user authored this comment
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Replace the comment content. Callers must re-moderate first.
    pub fn edit(&mut self, content: String) {
        self.content = content;
    }

    /// Check if comment content is blank
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Immutable audit record for a comment rejected by moderation.
///
/// Lives in its own id space, is written exactly once at flag time and is
/// never exposed through the mutation endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedComment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    /// Space-joined, lexicographically sorted category names that triggered
    /// the flag.
    pub blocking_reasoning: String,
    pub created_at: DateTime<Utc>,
}

impl BlockedComment {
    /// Build the audit record for a flagged submission
    pub fn from_verdict(
        id: Snowflake,
        post_id: Snowflake,
        author_id: Snowflake,
        content: String,
        verdict: &ModerationVerdict,
    ) -> Self {
        Self {
            id,
            post_id,
            author_id,
            content,
            blocking_reasoning: verdict.blocking_reasoning(),
            created_at: Utc::now(),
        }
    }
}

/// Outcome of admitting one comment submission through the moderation gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentAdmission {
    /// Verdict was clean; the comment was stored in the main table
    Published(Comment),
    /// Verdict was flagged; only the audit record was stored
    Blocked(BlockedComment),
}

impl CommentAdmission {
    /// Check if the submission was published
    #[inline]
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published(_))
    }
}
