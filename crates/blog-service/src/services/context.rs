//! Service context - dependency container for services
//!
//! Holds the repositories, the content classifier, and the other
//! dependencies the services need.

use std::sync::Arc;

use blog_common::auth::JwtService;
use blog_core::traits::{
    BlockedCommentRepository, CommentRepository, ContentClassifier, PostRepository, UserRepository,
};
use blog_core::SnowflakeGenerator;
use blog_db::PgPool;

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services. It
/// provides access to:
/// - Database repositories
/// - The content classifier (moderation port)
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    blocked_comment_repo: Arc<dyn BlockedCommentRepository>,

    classifier: Arc<dyn ContentClassifier>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        blocked_comment_repo: Arc<dyn BlockedCommentRepository>,
        classifier: Arc<dyn ContentClassifier>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            post_repo,
            comment_repo,
            blocked_comment_repo,
            classifier,
            jwt_service,
            snowflake_generator,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the blocked comment repository
    pub fn blocked_comment_repo(&self) -> &dyn BlockedCommentRepository {
        self.blocked_comment_repo.as_ref()
    }

    /// Get the content classifier
    pub fn classifier(&self) -> &dyn ContentClassifier {
        self.classifier.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> blog_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("classifier", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    blocked_comment_repo: Option<Arc<dyn BlockedCommentRepository>>,
    classifier: Option<Arc<dyn ContentClassifier>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn blocked_comment_repo(mut self, repo: Arc<dyn BlockedCommentRepository>) -> Self {
        self.blocked_comment_repo = Some(repo);
        self
    }

    pub fn classifier(mut self, classifier: Arc<dyn ContentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.blocked_comment_repo
                .ok_or_else(|| ServiceError::validation("blocked_comment_repo is required"))?,
            self.classifier
                .ok_or_else(|| ServiceError::validation("classifier is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
