//! User service
//!
//! Profile lookups and account deletion.

use blog_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::ProfileResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the public profile for a user
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .user_repo()
            .find_profile(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        Ok(ProfileResponse::from(profile))
    }

    /// Delete the calling user's account and profile
    #[instrument(skip(self))]
    pub async fn delete_account(&self, user_id: Snowflake) -> ServiceResult<String> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id = %user_id, "User account deleted");
        Ok(user.username)
    }
}
