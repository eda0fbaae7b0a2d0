//! Domain models for rebrand
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Rule`] - "Replace every occurrence of this with that"
//! - [`Target`] - A relative file path slated for inspection
//! - [`RunPlan`] - Base directory, rules and targets for one run
//! - [`FileReport`] - What happened to one target

mod outcome;
mod plan;
mod rule;
mod target;

pub use outcome::{FileReport, FileStatus, ProcessError};
pub use plan::RunPlan;
pub use rule::Rule;
pub use target::{ParseError, Target};
