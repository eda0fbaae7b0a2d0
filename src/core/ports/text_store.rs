//! Text store port
//!
//! Defines the interface for checking, reading and overwriting target files.

use std::io;
use std::path::Path;

/// Storage for the files being rewritten
///
/// Content is exchanged as raw bytes on read so that decoding failures are
/// reported by the caller rather than hidden inside the store.
#[cfg_attr(test, mockall::automock)]
pub trait TextStore {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read the full content of the file at `path`
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the full content of the file at `path`
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}
