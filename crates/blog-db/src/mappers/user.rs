//! User entity <-> model mapper

use blog_core::entities::{User, UserProfile};
use blog_core::value_objects::Snowflake;

use crate::models::{UserModel, UserProfileModel};

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert UserProfileModel to UserProfile entity
impl From<UserProfileModel> for UserProfile {
    fn from(model: UserProfileModel) -> Self {
        UserProfile {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            bio: model.bio,
            picture_url: model.picture_url,
        }
    }
}
