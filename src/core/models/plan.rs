//! Run plan model
//!
//! Everything a single run needs, passed explicitly into the runner.

use std::path::PathBuf;

use super::{Rule, Target};

/// Base directory, ordered rules and ordered targets for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// Absolute root against which all targets are resolved
    pub base_dir: PathBuf,

    /// Rules, applied in order to each file's cumulative content
    pub rules: Vec<Rule>,

    /// Targets, processed in order
    pub targets: Vec<Target>,

    /// Report what would change without writing anything
    pub dry_run: bool,
}

impl RunPlan {
    /// Create a plan that writes changes
    #[must_use]
    pub const fn new(base_dir: PathBuf, rules: Vec<Rule>, targets: Vec<Target>) -> Self {
        Self {
            base_dir,
            rules,
            targets,
            dry_run: false,
        }
    }

    /// Switch dry-run mode on or off
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
