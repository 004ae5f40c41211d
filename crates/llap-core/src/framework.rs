//! Fetching the execution framework's library bundle

use crate::{Error, Result};
use llap_fs::{FileSystem, LocalFs};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Scratch directory inside `lib/` an archive is extracted into.
const UNPACK_DIR: &str = ".unpack";

/// Obtains the execution framework's libraries into a local directory.
pub trait FrameworkFetcher {
    /// Populate `lib_dir` from the location(s) in `uri`.
    fn fetch_into(&self, uri: &str, lib_dir: &Path) -> Result<()>;
}

/// Fetches bundles reachable on the local filesystem.
///
/// `uri` is a comma-separated list of plain paths or `file://` URIs. Each
/// entry may be a `.tar.gz`/`.tgz` archive (extracted with `tar`, its files
/// flattened into `lib_dir`), a directory (its files copied flat), or a
/// single file. Nothing below `lib_dir` is left as a subdirectory.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalBundleFetcher {
    fs: LocalFs,
}

impl LocalBundleFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn local_path(uri: &str) -> Result<PathBuf> {
        if let Some(path) = uri.strip_prefix("file://") {
            return Ok(PathBuf::from(path));
        }
        if uri.contains("://") {
            return Err(Error::UnsupportedScheme {
                uri: uri.to_string(),
            });
        }
        Ok(PathBuf::from(uri))
    }

    fn copy_flat(&self, dir: &Path, lib_dir: &Path) -> Result<()> {
        for entry in self.fs.list_dir(dir)? {
            if entry.is_dir() {
                self.copy_flat(&entry, lib_dir)?;
            } else {
                self.fs.copy_into(&entry, lib_dir)?;
            }
        }
        Ok(())
    }

    /// Unpack an archive into `lib_dir`, flattening its directory tree.
    ///
    /// The archive is copied in, extracted into a scratch directory, and
    /// its files are copied flat into `lib_dir`. The copied archive and the
    /// scratch directory are removed afterwards.
    fn unpack(&self, archive: &Path, lib_dir: &Path) -> Result<()> {
        let staged = self.fs.copy_into(archive, lib_dir)?;
        let scratch = lib_dir.join(UNPACK_DIR);
        self.fs.create_dir_all(&scratch)?;

        let output = Command::new("tar")
            .arg("-xzf")
            .arg(&staged)
            .arg("-C")
            .arg(&scratch)
            .output()
            .map_err(|e| Error::ExtractFailed {
                archive: archive.to_path_buf(),
                message: e.to_string(),
            })?;
        if !output.status.success() {
            return Err(Error::ExtractFailed {
                archive: archive.to_path_buf(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        self.fs.remove_file(&staged)?;
        self.copy_flat(&scratch, lib_dir)?;
        self.fs.remove_dir_all(&scratch)?;
        Ok(())
    }
}

fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".tar.gz") || n.ends_with(".tgz"))
}

impl FrameworkFetcher for LocalBundleFetcher {
    fn fetch_into(&self, uri: &str, lib_dir: &Path) -> Result<()> {
        for entry in uri.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let path = Self::local_path(entry)?;
            tracing::debug!(from = %path.display(), "copying framework libraries");
            if path.is_dir() {
                self.copy_flat(&path, lib_dir)?;
            } else if is_archive(&path) {
                self.unpack(&path, lib_dir)?;
            } else {
                self.fs.copy_into(&path, lib_dir)?;
            }
        }
        Ok(())
    }
}
