//! Run service - processes every target of a plan
//!
//! Targets are handled strictly one after another. Whatever happens to one
//! file is captured in its [`FileReport`]; the loop always reaches the end
//! of the target list.

use std::path::Path;

use crate::core::models::{FileReport, FileStatus, ProcessError, Rule, RunPlan};
use crate::core::ports::TextStore;

use super::replacer::apply_rules;

/// Process a single resolved path
///
/// Reads at most once and writes at most once. Nothing is written when the
/// content is unchanged or when `dry_run` is set.
pub fn process_file<S: TextStore + ?Sized>(
    store: &S,
    path: &Path,
    rules: &[Rule],
    dry_run: bool,
) -> Result<FileStatus, ProcessError> {
    if !store.exists(path) {
        return Ok(FileStatus::NotFound);
    }

    let bytes = store.read(path).map_err(ProcessError::Read)?;
    let original = String::from_utf8(bytes)?;

    let replaced = apply_rules(&original, rules);
    if !replaced.differs_from(&original) {
        return Ok(FileStatus::Unchanged);
    }

    if dry_run {
        log::debug!("Dry run, not writing {}", path.display());
    } else {
        store.write(path, &replaced.content).map_err(ProcessError::Write)?;
    }

    Ok(FileStatus::Updated {
        replacements: replaced.replacements,
    })
}

/// Run the plan, handing each report to `on_file` as soon as it is ready
///
/// Returns all reports in target order.
pub fn run_each<S, F>(store: &S, plan: &RunPlan, mut on_file: F) -> Vec<FileReport>
where
    S: TextStore + ?Sized,
    F: FnMut(&FileReport),
{
    let mut reports = Vec::with_capacity(plan.targets.len());

    for target in &plan.targets {
        let path = target.resolve(&plan.base_dir);
        log::debug!("Processing {}", path.display());

        let result = process_file(store, &path, &plan.rules, plan.dry_run);
        if let Err(err) = &result {
            log::warn!("{target}: {err}");
        }

        let report = FileReport {
            target: target.raw().to_string(),
            path,
            result,
        };
        on_file(&report);
        reports.push(report);
    }

    reports
}

/// Run the plan and collect the reports
pub fn run<S: TextStore + ?Sized>(store: &S, plan: &RunPlan) -> Vec<FileReport> {
    run_each(store, plan, |_| {})
}
