//! Configuration management
//!
//! A [`RebrandConfig`] is the explicit description of a run: base directory,
//! ordered rules, ordered targets and the write strategy. It comes from, in
//! order of preference:
//!
//! 1. the file named by `--config`
//! 2. `rebrand.toml` in the working directory
//! 3. the built-in rebranding defaults
//!
//! A `--base-dir` flag overrides whatever the chosen source says.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::adapters::toml::{self as toml_file, ConfigFile, RuleEntry};
use crate::core::models::{ParseError, Rule, RunPlan, Target};
use crate::paths;

/// Built-in replacement rules
pub const DEFAULT_RULES: [(&str, &str); 4] = [
    ("NoFxAiOS/nofx", "xbcvv/nofx-0210"),
    ("ghcr.io/nofxaios/nofx/nofx-backend:stable", "xbcvv/nofx-backend:latest"),
    ("ghcr.io/nofxaios/nofx/nofx-frontend:stable", "xbcvv/nofx-frontend:latest"),
    (
        "https://raw.githubusercontent.com/NoFxAiOS/nofx/release/stable",
        "https://raw.githubusercontent.com/xbcvv/nofx-0210/main",
    ),
];

/// Built-in target files
pub const DEFAULT_TARGETS: [&str; 8] = [
    "docker-compose.stable.yml",
    r"web\src\constants\branding.ts",
    r"web\src\components\landing\FooterSection.tsx",
    r"web\src\components\faq\FAQLayout.tsx",
    r"web\src\components\faq\FAQContent.tsx",
    r"scripts\pr-fix.sh",
    r"scripts\pr-check.sh",
    "install-stable.sh",
];

/// Errors that can occur while loading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file named explicitly does not exist
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Config file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config in {}: {source}", .path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    /// Config file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A rule has an empty `old` string
    #[error("rule {index} has an empty `old` pattern")]
    EmptyPattern {
        /// 1-based position of the rule
        index: usize,
    },

    /// A target is not a usable relative path
    #[error("invalid target {raw:?}: {source}")]
    InvalidTarget {
        /// Target as written
        raw: String,
        /// Why it was rejected
        #[source]
        source: ParseError,
    },
}

/// Effective configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebrandConfig {
    /// Absolute root against which targets are resolved
    pub base_dir: PathBuf,

    /// Rules, in application order
    pub rules: Vec<Rule>,

    /// Targets, in processing order
    pub targets: Vec<Target>,

    /// Write through a temporary file and rename
    pub atomic_write: bool,

    /// File this configuration was loaded from, if any
    pub source: Option<PathBuf>,
}

impl RebrandConfig {
    /// Built-in configuration rooted at `base_dir`
    #[must_use]
    pub fn builtin(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            rules: DEFAULT_RULES.iter().map(|(old, new)| Rule::new(*old, *new)).collect(),
            targets: DEFAULT_TARGETS
                .iter()
                .filter_map(|t| Target::parse(t).ok())
                .collect(),
            atomic_write: false,
            source: None,
        }
    }

    /// Resolve the configuration for a working directory
    ///
    /// An explicit path must exist. Without one, `rebrand.toml` in `cwd` is
    /// used when present, otherwise the built-in defaults rooted at `cwd`.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let path = paths::absolutize(path, cwd);
            if !path.is_file() {
                return Err(ConfigError::NotFound(path));
            }
            return Self::from_file(&path);
        }

        let default_path = paths::config_file(cwd);
        if default_path.is_file() {
            return Self::from_file(&default_path);
        }

        log::debug!("No {} found, using built-in rules", paths::CONFIG_FILE);
        Ok(Self::builtin(paths::absolutize(Path::new("."), cwd)))
    }

    /// Load and validate a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading config from {}", path.display());
        let file = toml_file::load_file(path)?;
        let origin = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut config = Self::from_document(file, origin)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate a parsed document
    ///
    /// A relative `base_dir` is resolved against `origin`, normally the
    /// directory holding the config file. A missing one means `origin` itself.
    pub fn from_document(file: ConfigFile, origin: &Path) -> Result<Self, ConfigError> {
        let base_dir = file.base_dir.as_deref().map_or_else(
            || paths::absolutize(Path::new("."), origin),
            |dir| paths::absolutize(Path::new(dir), origin),
        );

        let rules = file
            .rules
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                if entry.old.is_empty() {
                    Err(ConfigError::EmptyPattern { index: i + 1 })
                } else {
                    Ok(Rule::new(entry.old, entry.new))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let targets = file
            .targets
            .iter()
            .map(|raw| {
                Target::parse(raw).map_err(|source| ConfigError::InvalidTarget {
                    raw: raw.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            base_dir,
            rules,
            targets,
            atomic_write: file.atomic_write,
            source: None,
        })
    }

    /// Override the base directory
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: PathBuf) -> Self {
        self.base_dir = base_dir;
        self
    }

    /// Build the run plan for this configuration
    #[must_use]
    pub fn plan(&self, dry_run: bool) -> RunPlan {
        RunPlan::new(self.base_dir.clone(), self.rules.clone(), self.targets.clone())
            .with_dry_run(dry_run)
    }

    /// Convert back into a document suitable for writing
    ///
    /// `base_dir` is written as given; callers seeding a new file usually
    /// want `"."` so the file stays relocatable.
    #[must_use]
    pub fn to_document(&self, base_dir: Option<String>) -> ConfigFile {
        ConfigFile {
            base_dir,
            atomic_write: self.atomic_write,
            targets: self.targets.iter().map(|t| t.raw().to_string()).collect(),
            rules: self
                .rules
                .iter()
                .map(|r| RuleEntry {
                    old: r.old.clone(),
                    new: r.new.clone(),
                })
                .collect(),
        }
    }
}
