//! Adapter implementations for port traits and file formats
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `fs/` - [`TextStore`] over the real filesystem
//! - `toml/` - `rebrand.toml` parsing and writing
//!
//! [`TextStore`]: crate::core::ports::TextStore

pub mod fs;
pub mod toml;
