//! `rebrand.toml` support
//!
//! - [`parser`] - Read and deserialize config files
//! - [`writer`] - Format and write config files

pub mod parser;
pub mod writer;

pub use parser::{ConfigFile, RuleEntry, load_file, parse_str};
pub use writer::{format_config_file, write_file};
