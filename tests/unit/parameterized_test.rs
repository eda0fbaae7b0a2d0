//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use std::path::PathBuf;

use rebrand::core::models::{ParseError, Rule, Target};
use rebrand::core::services::apply_rules;
use test_case::test_case;

// =============================================================================
// Target Parsing Tests
// =============================================================================

#[test_case("docker-compose.stable.yml", &["docker-compose.stable.yml"] ; "plain file")]
#[test_case(
    r"web\src\constants\branding.ts",
    &["web", "src", "constants", "branding.ts"] ;
    "backslashes"
)]
#[test_case("scripts/pr-check.sh", &["scripts", "pr-check.sh"] ; "forward slashes")]
#[test_case(
    r"web/src\components//faq\FAQContent.tsx",
    &["web", "src", "components", "faq", "FAQContent.tsx"] ;
    "mixed and doubled"
)]
fn test_target_normalization(raw: &str, parts: &[&str]) {
    let target = Target::parse(raw).unwrap();
    let expected: PathBuf = parts.iter().collect();
    assert_eq!(target.relative_path(), expected);
}

#[test_case("" ; "empty")]
#[test_case(r".\" ; "only current dir")]
#[test_case("  " ; "whitespace")]
fn test_target_empty(raw: &str) {
    assert_eq!(Target::parse(raw), Err(ParseError::Empty));
}

#[test_case("/abs/path.txt" ; "unix absolute")]
#[test_case(r"C:\nofx\file.txt" ; "drive letter")]
fn test_target_absolute(raw: &str) {
    assert!(matches!(Target::parse(raw), Err(ParseError::Absolute(_))));
}

// =============================================================================
// Replacement Tests
// =============================================================================

fn rules() -> Vec<Rule> {
    crate::common::rebrand_rules()
}

#[test_case("hello world", "hello world", 0 ; "no match")]
#[test_case("NoFxAiOS/nofx", "xbcvv/nofx-0210", 1 ; "org rename")]
#[test_case("nofxaios/nofx", "nofxaios/nofx", 0 ; "case sensitive")]
#[test_case(
    "ghcr.io/nofxaios/nofx/nofx-frontend:stable",
    "xbcvv/nofx-frontend:latest",
    1 ;
    "frontend image"
)]
#[test_case(
    "ghcr.io/nofxaios/nofx/nofx-backend:stable-rc",
    "xbcvv/nofx-backend:latest-rc",
    1 ;
    "prefix of longer tag"
)]
fn test_rebrand_rules(input: &str, expected: &str, count: usize) {
    let result = apply_rules(input, &rules());
    assert_eq!(result.content, expected);
    assert_eq!(result.replacements, count);
}
