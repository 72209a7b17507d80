//! Wire types for the moderation endpoint
//!
//! Request: `{"input": "<text>"}` with a bearer credential.
//! Response: `{"results": [{"flagged": bool, "categories": {name: bool}}]}`;
//! only the first result is consumed. This shape is the contract the comment
//! gate depends on and must be preserved by any substitute classifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use blog_core::{DomainError, ModerationVerdict};

/// Classification request body
#[derive(Debug, Serialize)]
pub struct ModerationRequest<'a> {
    pub input: &'a str,
}

/// Classification response body
#[derive(Debug, Deserialize)]
pub struct ModerationResponse {
    pub results: Vec<ModerationResult>,
}

/// One classification result
#[derive(Debug, Deserialize)]
pub struct ModerationResult {
    pub flagged: bool,
    #[serde(default)]
    pub categories: BTreeMap<String, bool>,
}

/// Extract the verdict from a response body.
///
/// An empty `results` array is a malformed response and counts as the
/// service being unavailable, not as a clean verdict.
pub fn verdict_from_response(body: ModerationResponse) -> Result<ModerationVerdict, DomainError> {
    let result = body.results.into_iter().next().ok_or_else(|| {
        DomainError::ModerationUnavailable("response contained no results".to_string())
    })?;

    Ok(ModerationVerdict {
        flagged: result.flagged,
        categories: result.categories,
    })
}
