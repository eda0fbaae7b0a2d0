//! Target parsing
//!
//! A Target is a file path relative to the base directory. Both `/` and `\`
//! are accepted as separators so that lists written on one platform resolve
//! on another.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use rebrand::core::models::Target;
//!
//! let t = Target::parse(r"web\src\constants\branding.ts").unwrap();
//! assert_eq!(t.relative_path(), Path::new("web/src/constants/branding.ts"));
//! assert_eq!(t.raw(), r"web\src\constants\branding.ts");
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::paths;

/// Errors that can occur when parsing a target
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Target string was empty or contained only separators
    #[error("empty target")]
    Empty,

    /// Target was an absolute path
    #[error("target must be relative to the base directory: {0}")]
    Absolute(String),
}

/// A parsed target path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// The original target string, as written in the configuration
    raw: String,

    /// Normalized relative path
    relative: PathBuf,
}

impl Target {
    /// Parse a target string into a Target
    ///
    /// The string is taken verbatim, so names with leading or trailing spaces
    /// are kept. A target made only of whitespace is rejected as empty.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        if s.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        if is_absolute(s) {
            return Err(ParseError::Absolute(s.to_string()));
        }

        let relative = paths::normalize_relative(s);
        if relative.as_os_str().is_empty() {
            return Err(ParseError::Empty);
        }

        Ok(Self {
            raw: s.to_string(),
            relative,
        })
    }

    /// Get the original target string
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Get the normalized relative path
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative
    }

    /// Resolve this target against a base directory
    #[must_use]
    pub fn resolve(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.relative)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Absolute on any platform: leading separator or a drive letter
fn is_absolute(s: &str) -> bool {
    let bytes = s.as_bytes();
    s.starts_with(['/', '\\'])
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
        || Path::new(s).is_absolute()
}
