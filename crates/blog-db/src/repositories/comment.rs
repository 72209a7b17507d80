//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Comment;
use blog_core::traits::{CommentRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::{comment_not_found, map_db_error};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, author_id, content, created_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, author_id, content, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, post_id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.post_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE comments
            SET content = $2
            WHERE id = $1
            ",
        )
        .bind(comment.id.into_inner())
        .bind(&comment.content)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, author_id, content, created_at
            FROM comments
            WHERE created_at >= $1 AND created_at <= $2
            ORDER BY created_at ASC
            ",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }
}
