//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing rebrand components.

use std::fs;
use std::path::{Path, PathBuf};

use rebrand::core::models::{Rule, RunPlan, Target};
use tempfile::TempDir;

/// Content of a stable compose file before rebranding
pub const COMPOSE_STABLE: &str = "\
services:
  backend:
    image: ghcr.io/nofxaios/nofx/nofx-backend:stable
  frontend:
    image: ghcr.io/nofxaios/nofx/nofx-frontend:stable
";

/// Content of an install script before rebranding
pub const INSTALL_STABLE: &str = "\
#!/bin/sh
# https://github.com/NoFxAiOS/nofx
curl -fsSL https://raw.githubusercontent.com/NoFxAiOS/nofx/release/stable/docker-compose.stable.yml
";

/// A temporary project tree with a standard structure
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create a new project tree:
    /// ```text
    /// /
    /// ├── docker-compose.stable.yml
    /// ├── install-stable.sh
    /// ├── README.md
    /// └── web/src/constants/branding.ts
    /// ```
    pub fn new() -> Self {
        let project = Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        };
        project.add_file("docker-compose.stable.yml", COMPOSE_STABLE);
        project.add_file("install-stable.sh", INSTALL_STABLE);
        project.add_file("README.md", "# hello world\n");
        project.add_file(
            "web/src/constants/branding.ts",
            "export const REPO = 'https://github.com/NoFxAiOS/nofx'\n",
        );
        project
    }

    /// Get the root path of the project
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file in the project
    pub fn file(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Add a file, creating parent directories
    pub fn add_file(&self, rel: &str, content: &str) {
        let full_path = self.file(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Read a file back
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.file(rel)).unwrap()
    }

    /// Build a plan rooted at this project
    pub fn plan(&self, targets: &[&str], rules: Vec<Rule>) -> RunPlan {
        RunPlan::new(
            self.path().to_path_buf(),
            rules,
            targets.iter().map(|t| Target::parse(t).unwrap()).collect(),
        )
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// The four built-in rebranding rules
pub fn rebrand_rules() -> Vec<Rule> {
    rebrand::config::DEFAULT_RULES.iter().map(|(old, new)| Rule::new(*old, *new)).collect()
}
