//! List the effective configuration

use rebrand::config::RebrandConfig;
use rebrand::output::{OutputMode, RuleListResult};

/// Print base directory, rules and targets
pub fn rules(config: &RebrandConfig, mode: OutputMode) {
    RuleListResult::from(config).render(mode);
}
