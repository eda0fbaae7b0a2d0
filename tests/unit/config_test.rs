//! Tests for configuration loading

use std::fs;
use std::path::Path;

use rebrand::config::{ConfigError, DEFAULT_TARGETS, RebrandConfig};
use rebrand::core::models::Rule;
use tempfile::TempDir;

// =============================================================================
// DISCOVERY
// =============================================================================

#[test]
fn test_discover_without_file_uses_builtin() {
    let temp = TempDir::new().unwrap();

    let config = RebrandConfig::discover(None, temp.path()).unwrap();

    assert!(config.source.is_none());
    assert_eq!(config.base_dir, temp.path());
    assert_eq!(config.rules.len(), 4);
    assert_eq!(config.targets.len(), DEFAULT_TARGETS.len());
}

#[test]
fn test_discover_reads_rebrand_toml() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("rebrand.toml"),
        r#"
targets = ["a.txt"]

[[rule]]
old = "foo"
new = "bar"
"#,
    )
    .unwrap();

    let config = RebrandConfig::discover(None, temp.path()).unwrap();

    assert_eq!(config.source.as_deref(), Some(temp.path().join("rebrand.toml").as_path()));
    assert_eq!(config.rules, vec![Rule::new("foo", "bar")]);
    assert_eq!(config.targets.len(), 1);
    assert_eq!(config.base_dir, temp.path());
}

#[test]
fn test_discover_explicit_relative_path() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("conf")).unwrap();
    fs::write(temp.path().join("conf/brand.toml"), "base_dir = \"..\"\ntargets = [\"x.txt\"]\n")
        .unwrap();

    let config = RebrandConfig::discover(Some(Path::new("conf/brand.toml")), temp.path()).unwrap();

    assert_eq!(config.base_dir, temp.path().join("conf").join(".."));
    assert!(config.rules.is_empty());
}

#[test]
fn test_discover_explicit_missing_is_error() {
    let temp = TempDir::new().unwrap();

    let err = RebrandConfig::discover(Some(Path::new("nope.toml")), temp.path()).unwrap_err();

    assert!(matches!(err, ConfigError::NotFound(_)));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_discover_invalid_toml_is_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rebrand.toml"), "[[rule]]\nold = 3\n").unwrap();

    let err = RebrandConfig::discover(None, temp.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_discover_rejects_empty_pattern() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rebrand.toml"), "[[rule]]\nold = \"\"\nnew = \"x\"\n").unwrap();

    let err = RebrandConfig::discover(None, temp.path()).unwrap_err();

    assert_eq!(err.to_string(), "rule 1 has an empty `old` pattern");
}

// =============================================================================
// OVERRIDES
// =============================================================================

#[test]
fn test_base_dir_override() {
    let temp = TempDir::new().unwrap();
    let config = RebrandConfig::discover(None, temp.path())
        .unwrap()
        .with_base_dir(Path::new("/srv/nofx").to_path_buf());

    assert_eq!(config.plan(false).base_dir, Path::new("/srv/nofx"));
}
