//! # blog-moderation
//!
//! Outbound HTTP client for the external content-classification service,
//! implementing the `ContentClassifier` port from `blog-core`.
//!
//! The service is a hard dependency of comment submission: there is no
//! retry, verdict caching, or local fallback. Failures are surfaced as
//! distinct domain errors (`ModerationUnavailable`, `ModerationTimeout`) so
//! an outage is never mistaken for a flagged verdict.

mod client;
mod wire;

pub use client::ModerationClient;
