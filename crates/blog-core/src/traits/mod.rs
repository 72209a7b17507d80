//! Ports - repository and classifier traits the infrastructure implements

mod moderation;
mod repositories;

pub use moderation::ContentClassifier;
pub use repositories::{
    BlockedCommentRepository, CommentRepository, PostRepository, RepoResult, UserRepository,
};
