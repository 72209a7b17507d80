//! Moderation verdict - the transient result of one classifier call
//!
//! Produced per call and consumed immediately; only the derived reasoning
//! string is ever persisted (inside a `BlockedComment`).

use std::collections::BTreeMap;

/// Verdict returned by the external content classifier.
///
/// Categories are kept in a `BTreeMap` so the reasoning string derived from
/// them is deterministic regardless of the order the remote service emits
/// them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationVerdict {
    pub flagged: bool,
    pub categories: BTreeMap<String, bool>,
}

impl ModerationVerdict {
    /// A verdict that flags nothing
    pub fn clean() -> Self {
        Self {
            flagged: false,
            categories: BTreeMap::new(),
        }
    }

    /// A flagged verdict over the given triggered category names
    pub fn flagged_for<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            flagged: true,
            categories: categories.into_iter().map(|c| (c.into(), true)).collect(),
        }
    }

    /// Names of the categories that triggered, in lexicographic order
    pub fn triggered_categories(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .filter(|(_, triggered)| **triggered)
            .map(|(name, _)| name.as_str())
    }

    /// The audit reasoning string: triggered category names joined by a
    /// single space, lexicographically sorted.
    pub fn blocking_reasoning(&self) -> String {
        self.triggered_categories().collect::<Vec<_>>().join(" ")
    }
}
