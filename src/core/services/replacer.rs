//! Replacement service
//!
//! Applies rules in order, each rule seeing the cumulative result of the
//! previous ones. Every non-overlapping occurrence is replaced, scanning left
//! to right.

use crate::core::models::Rule;

/// Content after applying a rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    /// Rewritten content
    pub content: String,

    /// Total occurrences replaced across all rules
    pub replacements: usize,
}

impl Replaced {
    /// Whether the rewritten content differs from `original`
    #[must_use]
    pub fn differs_from(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Apply a single rule, returning the new content and the occurrence count
#[must_use]
pub fn apply_rule(content: &str, rule: &Rule) -> (String, usize) {
    let count = rule.occurrences_in(content);
    if count == 0 {
        return (content.to_string(), 0);
    }
    (content.replace(rule.old.as_str(), &rule.new), count)
}

/// Apply every rule in order
#[must_use]
pub fn apply_rules(content: &str, rules: &[Rule]) -> Replaced {
    let mut current = content.to_string();
    let mut replacements = 0;

    for rule in rules {
        let (next, count) = apply_rule(&current, rule);
        if count > 0 {
            log::debug!("  {count} occurrence(s) of {:?}", rule.old);
        }
        current = next;
        replacements += count;
    }

    Replaced {
        content: current,
        replacements,
    }
}
