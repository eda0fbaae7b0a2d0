//! Filesystem-backed `TextStore`

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::core::ports::TextStore;

/// Text store backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTextStore {
    /// Write through a temporary file and rename it over the target
    atomic: bool,
}

impl FsTextStore {
    /// Create a store; `atomic` selects temp-file-then-rename writes
    #[must_use]
    pub const fn new(atomic: bool) -> Self {
        Self { atomic }
    }

    /// Whether writes go through a temporary file
    #[must_use]
    pub const fn is_atomic(&self) -> bool {
        self.atomic
    }

    fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
        // Rename onto the link target so symlinks survive, as with a direct write
        let path = fs::canonicalize(path)?;
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let permissions = fs::metadata(&path)?.permissions();

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.as_file().set_permissions(permissions)?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl TextStore for FsTextStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if self.atomic {
            Self::write_atomic(path, content)
        } else {
            fs::write(path, content)
        }
    }
}
