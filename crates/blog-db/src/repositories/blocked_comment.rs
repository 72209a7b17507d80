//! PostgreSQL implementation of BlockedCommentRepository
//!
//! Append-and-read-only: blocked comments are an immutable audit trail, so
//! this repository deliberately exposes no update or delete.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::BlockedComment;
use blog_core::traits::{BlockedCommentRepository, RepoResult};

use crate::models::BlockedCommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BlockedCommentRepository
#[derive(Clone)]
pub struct PgBlockedCommentRepository {
    pool: PgPool,
}

impl PgBlockedCommentRepository {
    /// Create a new PgBlockedCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlockedCommentRepository for PgBlockedCommentRepository {
    #[instrument(skip(self))]
    async fn create(&self, blocked: &BlockedComment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO blocked_comments (id, post_id, author_id, content, blocking_reasoning, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(blocked.id.into_inner())
        .bind(blocked.post_id.into_inner())
        .bind(blocked.author_id.into_inner())
        .bind(&blocked.content)
        .bind(&blocked.blocking_reasoning)
        .bind(blocked.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<BlockedComment>> {
        let results = sqlx::query_as::<_, BlockedCommentModel>(
            r"
            SELECT id, post_id, author_id, content, blocking_reasoning, created_at
            FROM blocked_comments
            WHERE created_at >= $1 AND created_at <= $2
            ORDER BY created_at ASC
            ",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(BlockedComment::from).collect())
    }
}
