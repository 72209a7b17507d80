//! Authentication service
//!
//! Handles user registration, login, and access-token re-issuance.

use blog_common::auth::{hash_password, validate_password_strength, verify_password};
use blog_core::entities::{User, UserProfile};
use blog_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user. An empty profile is created alongside the
    /// account in the same transaction.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::conflict("Username already registered"));
        }

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = User::new(self.ctx.generate_id(), request.username, request.email);
        let profile = UserProfile::empty(self.ctx.generate_id(), user.id);

        self.ctx
            .user_repo()
            .create(&user, &profile, &password_hash)
            .await?;

        info!(user_id = %user.id, "User registered");

        self.issue_response(&user)
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(blog_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(blog_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(blog_common::AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");

        self.issue_response(&user)
    }

    /// Re-issue an access token for an already-authenticated user
    #[instrument(skip(self))]
    pub async fn refresh_token(&self, user_id: Snowflake) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        info!(user_id = %user.id, "Access token refreshed");

        self.issue_response(&user)
    }

    fn issue_response(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token = self
            .ctx
            .jwt_service()
            .issue_token(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user: CurrentUserResponse::from(user),
        })
    }
}
