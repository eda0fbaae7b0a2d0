//! Centralized path handling for rebrand
//!
//! Single source of truth for the config filename and for turning the
//! strings found in configuration into filesystem paths.
//!
//! ## Layout
//!
//! ```text
//! project/                      # base directory (default: where rebrand runs)
//! ├── rebrand.toml              # optional: base_dir, rules, targets
//! ├── docker-compose.stable.yml # target
//! └── web/src/...               # targets
//! ```
//!
//! Target lists may use `/` or `\` as separators regardless of host platform.

use std::path::{Component, Path, PathBuf};

/// Configuration filename, looked up in the working directory
pub const CONFIG_FILE: &str = "rebrand.toml";

/// Get the default config path for a working directory.
#[must_use]
pub fn config_file(cwd: &Path) -> PathBuf {
    cwd.join(CONFIG_FILE)
}

/// Split a relative path on `/` and `\` and rebuild it with host separators.
///
/// Empty and `.` segments are dropped; `..` is kept.
#[must_use]
pub fn normalize_relative(raw: &str) -> PathBuf {
    raw.split(['/', '\\']).filter(|seg| !seg.is_empty() && *seg != ".").collect()
}

/// Make `path` absolute by joining it onto `cwd` when it is relative.
///
/// `.` segments are removed so that `./` prefixes do not leak into reports.
#[must_use]
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    let cleaned: PathBuf =
        joined.components().filter(|c| !matches!(c, Component::CurDir)).collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
