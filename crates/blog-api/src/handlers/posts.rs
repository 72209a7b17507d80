//! Post handlers
//!
//! Endpoints for post CRUD. Mutations require authorship.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{
    ConfirmationResponse, CreatePostRequest, PostResponse, PostService, UpdatePostRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn parse_post_id(raw: &str) -> Result<blog_core::Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
}

/// List all posts
///
/// GET /posts
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_posts().await?;
    Ok(Json(posts))
}

/// Get post by ID
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = parse_post_id(&post_id)?;

    let service = PostService::new(state.service_context());
    let post = service.get_post(post_id).await?;
    Ok(Json(post))
}

/// Create post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(auth.user_id, request).await?;
    Ok(Created(Json(post)))
}

/// Update post (author only)
///
/// PUT /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = parse_post_id(&post_id)?;

    let service = PostService::new(state.service_context());
    let post = service.update_post(post_id, auth.user_id, request).await?;
    Ok(Json(post))
}

/// Delete post (author only)
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
) -> ApiResult<Json<ConfirmationResponse>> {
    let post_id = parse_post_id(&post_id)?;

    let service = PostService::new(state.service_context());
    service.delete_post(post_id, auth.user_id).await?;
    Ok(Json(ConfirmationResponse::new("Post deleted successfully.")))
}
