//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.
//! Each repository handles database operations for a specific domain entity.

mod blocked_comment;
mod comment;
mod error;
mod post;
mod user;

pub use blocked_comment::PgBlockedCommentRepository;
pub use comment::PgCommentRepository;
pub use post::PgPostRepository;
pub use user::PgUserRepository;
