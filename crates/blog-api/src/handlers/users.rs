//! User handlers
//!
//! Endpoints for profiles and account deletion.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{ConfirmationResponse, ProfileResponse, UserService};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get a user's public profile
///
/// GET /users/{user_id}/profile
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = UserService::new(state.service_context());
    let profile = service.get_profile(user_id).await?;
    Ok(Json(profile))
}

/// Get the authenticated user's profile
///
/// GET /users/@me/profile
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let profile = service.get_profile(auth.user_id).await?;
    Ok(Json(profile))
}

/// Delete the authenticated user's account
///
/// DELETE /users/@me
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ConfirmationResponse>> {
    let service = UserService::new(state.service_context());
    let username = service.delete_account(auth.user_id).await?;
    Ok(Json(ConfirmationResponse::new(format!(
        "User {username} was deleted successfully"
    ))))
}
