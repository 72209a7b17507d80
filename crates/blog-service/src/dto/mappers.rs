//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::entities::{BlockedComment, Comment, Post, User, UserProfile};

use super::responses::{
    BlockedCommentResponse, CommentResponse, CurrentUserResponse, PostResponse, ProfileResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&UserProfile> for ProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            bio: profile.bio.clone(),
            picture_url: profile.picture_url.clone(),
        }
    }
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self::from(&profile)
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            author_id: post.author_id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            author_id: comment.author_id.to_string(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

impl From<&BlockedComment> for BlockedCommentResponse {
    fn from(blocked: &BlockedComment) -> Self {
        Self {
            id: blocked.id.to_string(),
            post_id: blocked.post_id.to_string(),
            author_id: blocked.author_id.to_string(),
            content: blocked.content.clone(),
            blocking_reasoning: blocked.blocking_reasoning.clone(),
            created_at: blocked.created_at,
        }
    }
}

impl From<BlockedComment> for BlockedCommentResponse {
    fn from(blocked: BlockedComment) -> Self {
        Self::from(&blocked)
    }
}
