//! TOML parser for rebrand.toml files
//!
//! Handles reading and deserializing the raw document. Validation of rules
//! and targets happens in [`crate::config`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// A rebrand.toml file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Base directory; relative values resolve against the config file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,

    /// Write through a temporary file and rename
    #[serde(default)]
    pub atomic_write: bool,

    /// Relative paths of the files to rewrite
    #[serde(default)]
    pub targets: Vec<String>,

    /// Replacement rules, in application order
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleEntry>,
}

/// A `[[rule]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Text to search for
    pub old: String,

    /// Replacement text
    pub new: String,
}

/// Parse a config document from a string
pub fn parse_str(content: &str, path: &Path) -> Result<ConfigFile, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a config document from disk
pub fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content, path)
}
