//! The filesystem capability used by the packaging pipeline.
//!
//! The assembler never touches `std::fs` directly; it goes through a
//! [`FileSystem`] so tests can observe exactly which operations a run
//! performed.

use crate::{Error, Result, io};
use std::fs;
use std::path::{Path, PathBuf};

/// Operations the packaging pipeline may perform on a filesystem.
pub trait FileSystem {
    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Copy a file into a directory, keeping its file name.
    fn copy_into(&self, src: &Path, dir: &Path) -> Result<PathBuf>;

    /// Delete a single file.
    fn remove_file(&self, path: &Path) -> Result<()>;

    /// Delete a directory and everything below it.
    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// List the entries of a directory, sorted by path.
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Create (or replace) a file with the given content.
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| Error::io(path, e))
    }

    fn copy_into(&self, src: &Path, dir: &Path) -> Result<PathBuf> {
        let dest = io::copy_into(src, dir)?;
        tracing::debug!(src = %src.display(), dest = %dest.display(), "copied");
        Ok(dest)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|e| Error::io(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
        let mut paths = entries
            .map(|entry| entry.map(|e| e.path()).map_err(|e| Error::io(path, e)))
            .collect::<Result<Vec<_>>>()?;
        paths.sort();
        Ok(paths)
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        io::write_atomic(path, content)
    }
}
