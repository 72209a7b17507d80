//! Comment service - the moderation gate
//!
//! Every submission passes through the external classifier before anything
//! is persisted. A clean verdict stores a `Comment`; a flagged verdict
//! stores a `BlockedComment` audit record instead and the request is
//! answered with a rejection. Edits are re-moderated but a flagged edit
//! leaves no audit record; only new submissions do.

use blog_core::entities::{BlockedComment, Comment, CommentAdmission};
use blog_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List comments on a post, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, post_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Admit one comment submission through the moderation gate.
    ///
    /// Returns the tagged outcome; the HTTP layer translates `Published`
    /// into a 201 and `Blocked` into a rejection without ever exposing the
    /// audit record to the submitter. A classifier failure aborts the
    /// request before any row is written.
    #[instrument(skip(self, request), fields(post_id = %post_id, author_id = %author_id))]
    pub async fn create_comment(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentAdmission> {
        // The comment must point at an existing post
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let verdict = self.ctx.classifier().classify(&request.content).await?;

        if verdict.flagged {
            let blocked = BlockedComment::from_verdict(
                self.ctx.generate_id(),
                post_id,
                author_id,
                request.content,
                &verdict,
            );
            self.ctx.blocked_comment_repo().create(&blocked).await?;

            warn!(
                blocked_id = %blocked.id,
                reasoning = %blocked.blocking_reasoning,
                "Comment blocked by moderation"
            );
            return Ok(CommentAdmission::Blocked(blocked));
        }

        let comment = Comment::new(self.ctx.generate_id(), post_id, author_id, request.content);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, "Comment created");
        Ok(CommentAdmission::Published(comment))
    }

    /// Update a comment's content.
    ///
    /// Authorization precedes moderation: only the author may edit,
    /// regardless of what the new content is. The replacement content is
    /// re-classified; a flagged edit is rejected outright and no
    /// `BlockedComment` is written.
    #[instrument(skip(self, request), fields(comment_id = %comment_id, user_id = %user_id))]
    pub async fn update_comment(
        &self,
        post_id: Snowflake,
        comment_id: Snowflake,
        user_id: Snowflake,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.find_post_comment(post_id, comment_id).await?;

        if !comment.is_authored_by(user_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        let verdict = self.ctx.classifier().classify(&request.content).await?;
        if verdict.flagged {
            warn!(comment_id = %comment_id, "Comment edit rejected by moderation");
            return Err(DomainError::ContentFlagged.into());
        }

        comment.edit(request.content);
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment updated");
        Ok(CommentResponse::from(&comment))
    }

    /// Delete a comment; only its author may do so
    #[instrument(skip(self), fields(comment_id = %comment_id, user_id = %user_id))]
    pub async fn delete_comment(
        &self,
        post_id: Snowflake,
        comment_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<()> {
        let comment = self.find_post_comment(post_id, comment_id).await?;

        if !comment.is_authored_by(user_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }

    /// Look up a comment and verify it belongs to the given post. A comment
    /// reached through the wrong post is treated as absent.
    async fn find_post_comment(
        &self,
        post_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<Comment> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        if comment.post_id != post_id {
            return Err(ServiceError::not_found("Comment", comment_id.to_string()));
        }

        Ok(comment)
    }
}
