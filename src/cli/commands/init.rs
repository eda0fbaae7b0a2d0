//! Write a starter rebrand.toml

use std::path::Path;

use rebrand::adapters::toml::write_file;
use rebrand::config::RebrandConfig;
use rebrand::output::{OperationResult, OutputMode};

/// Write the built-in rules and targets to `path`
///
/// The seeded `base_dir` is `"."` unless `base_dir` overrides it.
pub fn init(
    path: &Path,
    base_dir: Option<&Path>,
    force: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to overwrite.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let seeded = base_dir.map_or_else(|| ".".to_string(), |dir| dir.display().to_string());
    let document = RebrandConfig::builtin(base.to_path_buf()).to_document(Some(seeded));
    write_file(path, &document)?;
    log::debug!("Wrote {} rule(s) to {}", document.rules.len(), path.display());

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);

    Ok(())
}
