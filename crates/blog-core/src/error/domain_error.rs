//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Profile not found for user: {0}")]
    ProfileNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Missing or invalid date range: {0}")]
    InvalidDateRange(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Post can be modified only by its author")]
    NotPostAuthor,

    #[error("Comment can be modified only by its author")]
    NotCommentAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already registered")]
    UsernameAlreadyExists,

    #[error("Email already registered")]
    EmailAlreadyExists,

    // =========================================================================
    // Moderation Outcomes and Failures
    // =========================================================================
    /// The classifier flagged the submitted content. Carries no category
    /// detail on purpose: the reasoning is an audit concern and must not
    /// reach the submitting client.
    #[error("Content is flagged by moderation")]
    ContentFlagged,

    #[error("Moderation service unavailable: {0}")]
    ModerationUnavailable(String),

    #[error("Moderation service timed out")]
    ModerationTimeout,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidDateRange(_) => "INVALID_DATE_RANGE",

            Self::NotPostAuthor => "NOT_POST_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",

            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            Self::ContentFlagged => "CONTENT_FLAGGED",
            Self::ModerationUnavailable(_) => "MODERATION_UNAVAILABLE",
            Self::ModerationTimeout => "MODERATION_TIMEOUT",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ProfileNotFound(_)
        )
    }

    /// Check if this is rejected input: a validation failure or content the
    /// classifier flagged. Both answer 422 Unprocessable Entity.
    pub fn is_unprocessable(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::ContentTooLong { .. }
                | Self::InvalidDateRange(_)
                | Self::ContentFlagged
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPostAuthor | Self::NotCommentAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists | Self::EmailAlreadyExists)
    }

    /// Check if this is a dependency failure (moderation upstream)
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::ModerationUnavailable(_) | Self::ModerationTimeout)
    }
}
