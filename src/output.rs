//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::config::RebrandConfig;
use crate::core::models::{FileReport, FileStatus};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Status of one file, as reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileState {
    /// Content changed
    Updated,
    /// Content identical after all rules
    Unchanged,
    /// Target does not exist
    NotFound,
    /// Processing failed
    Error,
}

/// One line of a run report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Target as written in the configuration
    pub target: String,
    /// Resolved path
    pub path: String,
    /// What happened
    pub status: FileState,
    /// Replacements performed (updated files only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacements: Option<usize>,
    /// Error message (failed files only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileEntry {
    /// Status line for human output
    #[must_use]
    pub fn human_line(&self, dry_run: bool) -> String {
        match self.status {
            FileState::Updated if dry_run => format!("Would update {}", self.target),
            FileState::Updated => format!("Updated {}", self.target),
            FileState::Unchanged => format!("No changes in {}", self.target),
            FileState::NotFound => format!("Skipping {} (not found)", self.path),
            FileState::Error => format!(
                "Error processing {}: {}",
                self.target,
                self.message.as_deref().unwrap_or_default()
            ),
        }
    }
}

impl From<&FileReport> for FileEntry {
    fn from(report: &FileReport) -> Self {
        let (status, replacements, message) = match &report.result {
            Ok(FileStatus::Updated { replacements }) => {
                (FileState::Updated, Some(*replacements), None)
            },
            Ok(FileStatus::Unchanged) => (FileState::Unchanged, None, None),
            Ok(FileStatus::NotFound) => (FileState::NotFound, None, None),
            Err(err) => (FileState::Error, None, Some(err.to_string())),
        };

        Self {
            target: report.target.clone(),
            path: report.path.display().to_string(),
            status,
            replacements,
            message,
        }
    }
}

/// Result of a run
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Whether writes were suppressed
    pub dry_run: bool,
    /// Per-file results, in target order
    pub files: Vec<FileEntry>,
}

impl RunReport {
    /// Build a report from runner output
    #[must_use]
    pub fn new(reports: &[FileReport], dry_run: bool) -> Self {
        Self {
            dry_run,
            files: reports.iter().map(FileEntry::from).collect(),
        }
    }

    /// Human status lines, one per target
    #[must_use]
    pub fn human_lines(&self) -> Vec<String> {
        self.files.iter().map(|f| f.human_line(self.dry_run)).collect()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for line in self.human_lines() {
            println!("{line}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// A rule as listed
#[derive(Debug, Serialize)]
pub struct RuleInfo {
    /// Text searched for
    pub old: String,
    /// Replacement text
    pub new: String,
}

/// Result of a rules listing
#[derive(Debug, Serialize)]
pub struct RuleListResult {
    /// Config file in use, if any
    pub source: Option<String>,
    /// Resolved base directory
    pub base_dir: String,
    /// Whether writes go through a temporary file
    pub atomic_write: bool,
    /// Rules in application order
    pub rules: Vec<RuleInfo>,
    /// Targets as written
    pub targets: Vec<String>,
}

impl From<&RebrandConfig> for RuleListResult {
    fn from(config: &RebrandConfig) -> Self {
        Self {
            source: config.source.as_ref().map(|p| p.display().to_string()),
            base_dir: config.base_dir.display().to_string(),
            atomic_write: config.atomic_write,
            rules: config
                .rules
                .iter()
                .map(|r| RuleInfo {
                    old: r.old.clone(),
                    new: r.new.clone(),
                })
                .collect(),
            targets: config.targets.iter().map(|t| t.raw().to_string()).collect(),
        }
    }
}

impl RuleListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match &self.source {
            Some(source) => println!("Config: {source}"),
            None => println!("Config: built-in defaults"),
        }
        println!("Base directory: {}", self.base_dir);
        if self.atomic_write {
            println!("Writes: atomic (temp file + rename)");
        }

        if self.rules.is_empty() {
            println!("\nNo rules defined.");
        } else {
            println!("\nRules:");
            for (i, r) in self.rules.iter().enumerate() {
                println!("  {}. {}", i + 1, r.old);
                println!("     -> {}", r.new);
            }
        }

        if self.targets.is_empty() {
            println!("\nNo targets defined.");
        } else {
            println!("\nTargets:");
            for t in &self.targets {
                println!("  {t}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
