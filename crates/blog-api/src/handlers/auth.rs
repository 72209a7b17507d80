//! Authentication handlers
//!
//! Endpoints for user registration, login, and token re-issuance.

use axum::{extract::State, Json};
use blog_service::{AuthResponse, AuthService, LoginRequest, RegisterRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Re-issue an access token for the authenticated user
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_token(auth.user_id).await?;
    Ok(Json(response))
}
