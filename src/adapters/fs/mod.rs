//! Filesystem text store
//!
//! Implements `TextStore` with either a direct overwrite or a
//! write-to-temp-then-rename strategy.

mod store;

pub use store::FsTextStore;
