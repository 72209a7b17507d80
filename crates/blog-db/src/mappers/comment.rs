//! Comment entity <-> model mappers

use blog_core::entities::{BlockedComment, Comment};
use blog_core::value_objects::Snowflake;

use crate::models::{BlockedCommentModel, CommentModel};

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            created_at: model.created_at,
        }
    }
}

/// Convert BlockedCommentModel to BlockedComment entity
impl From<BlockedCommentModel> for BlockedComment {
    fn from(model: BlockedCommentModel) -> Self {
        BlockedComment {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            blocking_reasoning: model.blocking_reasoning,
            created_at: model.created_at,
        }
    }
}
