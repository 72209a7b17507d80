//! Content classifier port
//!
//! The moderation gate depends on this trait; the outbound HTTP client in
//! `blog-moderation` implements it.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::value_objects::ModerationVerdict;

/// External text-classification service.
///
/// One call per comment submission; the caller awaits the verdict before any
/// persistence happens. There is no retry, caching, or local fallback: a
/// failed call fails the whole request, surfaced as
/// `DomainError::ModerationUnavailable` or `DomainError::ModerationTimeout`
/// so callers can tell an outage from a flagged verdict.
#[async_trait]
pub trait ContentClassifier: Send + Sync {
    /// Classify one piece of text
    async fn classify(&self, content: &str) -> Result<ModerationVerdict, DomainError>;
}
