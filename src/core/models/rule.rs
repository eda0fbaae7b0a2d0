//! Replacement rule model
//!
//! A rule is an ordered `(old, new)` pair applied by exact textual
//! replacement. No pattern syntax, no escaping.

use serde::{Deserialize, Serialize};

/// A literal substring replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Text to search for
    pub old: String,

    /// Text to substitute for every occurrence of `old`
    pub new: String,
}

impl Rule {
    /// Create a new rule
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// Count the non-overlapping occurrences of `old` in `content`
    #[must_use]
    pub fn occurrences_in(&self, content: &str) -> usize {
        content.matches(self.old.as_str()).count()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.old, self.new)
    }
}
