//! Apply the rules to every target

use rebrand::adapters::fs::FsTextStore;
use rebrand::config::RebrandConfig;
use rebrand::core::services::runner;
use rebrand::output::{FileEntry, OutputMode, RunReport};

/// Run the replacer over every configured target
///
/// Per-file failures are reported, never returned; the run always completes.
pub fn run(config: &RebrandConfig, dry_run: bool, mode: OutputMode) {
    let store = FsTextStore::new(config.atomic_write);
    let plan = config.plan(dry_run);

    log::debug!(
        "{} rule(s), {} target(s) under {}{}",
        plan.rules.len(),
        plan.targets.len(),
        plan.base_dir.display(),
        if store.is_atomic() { " (atomic writes)" } else { "" }
    );

    let reports = runner::run_each(&store, &plan, |report| {
        // Human output streams one line per file as it is processed
        if mode == OutputMode::Human {
            println!("{}", FileEntry::from(report).human_line(dry_run));
        }
    });

    if mode == OutputMode::Json {
        RunReport::new(&reports, dry_run).render(mode);
    }
}
