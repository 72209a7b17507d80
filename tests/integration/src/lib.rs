//! Integration test utilities for the blog server
//!
//! This crate provides helpers for running end-to-end tests against the
//! REST API, including a local stub of the moderation endpoint so the gate
//! is exercised over real HTTP without the external service.

pub mod fixtures;
pub mod helpers;
pub mod moderation_stub;

pub use fixtures::*;
pub use helpers::*;
