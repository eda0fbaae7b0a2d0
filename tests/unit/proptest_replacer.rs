//! Property-based tests for the replacer
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use rebrand::core::models::Rule;
use rebrand::core::services::{apply_rule, apply_rules};

proptest! {
    /// No rules means no change
    #[test]
    fn no_rules_is_identity(content in ".*") {
        let result = apply_rules(&content, &[]);
        prop_assert_eq!(result.content, content);
        prop_assert_eq!(result.replacements, 0);
    }

    /// A pattern that does not occur leaves content alone, whatever `new` is
    #[test]
    fn absent_pattern_is_identity(content in "[a-z ]{0,40}", new in ".*") {
        let rule = Rule::new("#NOT-PRESENT#", new);
        let (out, count) = apply_rule(&content, &rule);
        prop_assert_eq!(out, content);
        prop_assert_eq!(count, 0);
    }

    /// k inserted occurrences are all replaced
    #[test]
    fn every_occurrence_replaced(
        chunks in proptest::collection::vec("[a-z ]{0,8}", 1..6)
    ) {
        let content = chunks.join("NoFxAiOS/nofx");
        let k = chunks.len() - 1;
        let rule = Rule::new("NoFxAiOS/nofx", "xbcvv/nofx-0210");

        let (out, count) = apply_rule(&content, &rule);

        prop_assert_eq!(count, k);
        prop_assert_eq!(out.matches("xbcvv/nofx-0210").count(), k);
        prop_assert!(!out.contains("NoFxAiOS/nofx"));
    }

    /// Re-applying is a no-op when `new` cannot reintroduce `old`
    #[test]
    fn reapplying_is_idempotent(content in "[a-zA-Z/:. ]{0,60}") {
        let rules = crate::common::rebrand_rules();
        let once = apply_rules(&content, &rules);
        let twice = apply_rules(&once.content, &rules);
        prop_assert_eq!(&twice.content, &once.content);
        prop_assert_eq!(twice.replacements, 0);
    }
}
