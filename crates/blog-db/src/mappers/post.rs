//! Post entity <-> model mapper

use blog_core::entities::Post;
use blog_core::value_objects::Snowflake;

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
