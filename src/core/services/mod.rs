//! Business logic services
//!
//! - [`replacer`] - Apply ordered literal rules to a string (pure)
//! - [`runner`] - Process every target of a plan through a [`TextStore`]
//!
//! [`TextStore`]: crate::core::ports::TextStore

pub mod replacer;
pub mod runner;

pub use replacer::{Replaced, apply_rule, apply_rules};
pub use runner::{process_file, run, run_each};
