//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Post;
use blog_core::traits::{PostRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::PostModel;

use super::error::{map_db_error, post_not_found};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, author_id, title, content, created_at, updated_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, author_id, title, content, created_at, updated_at
            FROM posts
            ORDER BY id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO posts (id, author_id, title, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(post.id.into_inner())
        .bind(post.author_id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts
            SET title = $2, content = $3, updated_at = $4
            WHERE id = $1
            ",
        )
        .bind(post.id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Comments on the post go with it
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(r"DELETE FROM comments WHERE post_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query(r"DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)
    }
}
