//! rebrand - Rewrite a fixed set of literal strings across a list of files
//!
//! This library provides the core functionality for applying ordered literal
//! replacement rules to target files under a base directory, reporting a
//! per-file outcome without ever aborting the run on a single failure.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
