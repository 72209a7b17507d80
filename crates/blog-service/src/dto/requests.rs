//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and (where they carry fields to
//! check) `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    pub password: String,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 20000, message = "Content must be 1-20000 characters"))]
    pub content: String,
}

/// Update post request.
///
/// Fields left out of the payload stay untouched; a field that is present is
/// applied verbatim, including an intentional empty string for content.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 20000, message = "Content must be at most 20000 characters"))]
    pub content: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,
}
