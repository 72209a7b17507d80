//! Comment handlers
//!
//! Submissions pass through the moderation gate; the gate's tagged outcome
//! is translated here. A published comment answers 201 with the stored
//! record; a blocked one answers 422 and the audit record stays internal.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_core::entities::CommentAdmission;
use blog_core::DomainError;
use blog_service::{
    CommentResponse, CommentService, ConfirmationResponse, CreateCommentRequest,
    UpdateCommentRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn parse_ids(post_id: &str, comment_id: &str) -> Result<(blog_core::Snowflake, blog_core::Snowflake), ApiError> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;
    let comment_id = comment_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))?;
    Ok((post_id, comment_id))
}

/// List comments on a post
///
/// GET /posts/{post_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = CommentService::new(state.service_context());
    let comments = service.list_comments(post_id).await?;
    Ok(Json(comments))
}

/// Create comment (moderated)
///
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = CommentService::new(state.service_context());
    let admission = service.create_comment(post_id, auth.user_id, request).await?;

    match admission {
        CommentAdmission::Published(comment) => {
            Ok(Created(Json(CommentResponse::from(comment))))
        }
        // The blocked record is an audit artifact; the submitter only sees
        // the rejection.
        CommentAdmission::Blocked(_) => Err(DomainError::ContentFlagged.into()),
    }
}

/// Update comment (author only, re-moderated)
///
/// PUT /posts/{post_id}/comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((post_id, comment_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let (post_id, comment_id) = parse_ids(&post_id, &comment_id)?;

    let service = CommentService::new(state.service_context());
    let comment = service
        .update_comment(post_id, comment_id, auth.user_id, request)
        .await?;
    Ok(Json(comment))
}

/// Delete comment (author only)
///
/// DELETE /posts/{post_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> ApiResult<Json<ConfirmationResponse>> {
    let (post_id, comment_id) = parse_ids(&post_id, &comment_id)?;

    let service = CommentService::new(state.service_context());
    service
        .delete_comment(post_id, comment_id, auth.user_id)
        .await?;
    Ok(Json(ConfirmationResponse::new(
        "Comment deleted successfully.",
    )))
}
