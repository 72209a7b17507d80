//! Post service
//!
//! Post CRUD with author-only mutation.

use blog_core::entities::{Post, PostChanges};
use blog_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all posts, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list().await?;
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Get a post by ID
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Snowflake) -> ServiceResult<PostResponse> {
        let post = self.find_post(post_id).await?;
        Ok(PostResponse::from(post))
    }

    /// Create a new post
    #[instrument(skip(self, request), fields(author_id = %author_id))]
    pub async fn create_post(
        &self,
        author_id: Snowflake,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let post = Post::new(
            self.ctx.generate_id(),
            author_id,
            request.title,
            request.content,
        );

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, "Post created");
        Ok(PostResponse::from(post))
    }

    /// Update a post; only its author may do so
    #[instrument(skip(self, request), fields(post_id = %post_id, user_id = %user_id))]
    pub async fn update_post(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let mut post = self.find_post(post_id).await?;

        if !post.is_authored_by(user_id) {
            return Err(DomainError::NotPostAuthor.into());
        }

        post.apply(PostChanges {
            title: request.title,
            content: request.content,
        });
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post_id, "Post updated");
        Ok(PostResponse::from(post))
    }

    /// Delete a post; only its author may do so
    #[instrument(skip(self), fields(post_id = %post_id, user_id = %user_id))]
    pub async fn delete_post(&self, post_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let post = self.find_post(post_id).await?;

        if !post.is_authored_by(user_id) {
            return Err(DomainError::NotPostAuthor.into());
        }

        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }

    async fn find_post(&self, post_id: Snowflake) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))
    }
}
