//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer provides
//! the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{BlockedComment, Comment, Post, User, UserProfile};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user together with an empty profile, atomically
    async fn create(&self, user: &User, profile: &UserProfile, password_hash: &str)
        -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Get the profile attached to a user
    async fn find_profile(&self, user_id: Snowflake) -> RepoResult<Option<UserProfile>>;

    /// Delete a user and their profile
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// List all posts, newest first
    async fn list(&self) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List comments on a post, oldest first
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update comment content
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Comments created inside `[from, to]`, both instants inclusive
    async fn find_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<Comment>>;
}

// ============================================================================
// Blocked Comment Repository
// ============================================================================

/// Audit store for comments rejected by moderation. Append and read only;
/// blocked records are never mutated or deleted.
#[async_trait]
pub trait BlockedCommentRepository: Send + Sync {
    /// Record a blocked submission
    async fn create(&self, blocked: &BlockedComment) -> RepoResult<()>;

    /// Blocked comments created inside `[from, to]`, both instants inclusive
    async fn find_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<BlockedComment>>;
}
