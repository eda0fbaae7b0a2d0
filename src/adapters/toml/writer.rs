//! TOML writer for rebrand.toml files

use std::fs;
use std::path::Path;

use super::parser::ConfigFile;
use crate::config::ConfigError;

const HEADER: &str = "\
# rebrand configuration
#
# Every [[rule]] is applied in order to each target's content.
# Targets are relative to base_dir and may use / or \\ as separators.

";

/// Format a `ConfigFile` as TOML
pub fn format_config_file(file: &ConfigFile) -> Result<String, ConfigError> {
    let body = toml::to_string_pretty(file).map_err(ConfigError::Serialize)?;
    Ok(format!("{HEADER}{body}"))
}

/// Write a `ConfigFile` to disk
pub fn write_file(path: &Path, file: &ConfigFile) -> Result<(), ConfigError> {
    let content = format_config_file(file)?;
    fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
