//! rebrand - Rewrite literal strings across a fixed list of files
//!
//! Applies ordered literal replacement rules to each configured target and
//! prints one status line per file.

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

mod cli;

/// Main entry point for the rebrand CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
