//! Resolving library identifiers to packaging artifacts

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Finds the artifact that backs a library identifier.
pub trait ArtifactResolver {
    /// Return the path of the artifact for `library`, e.g. `hive-exec` ->
    /// `/opt/hive/lib/hive-exec-4.0.0.jar`.
    fn resolve(&self, library: &str) -> Result<PathBuf>;
}

/// Resolves libraries by scanning directories for `<id>.jar` or
/// `<id>-<version>.jar`.
///
/// Directories are searched in order. Within a directory the highest
/// matching file name wins, so the newest of several versions is picked.
#[derive(Debug, Clone, Default)]
pub struct DirectoryResolver {
    dirs: Vec<PathBuf>,
}

impl DirectoryResolver {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    fn candidates(dir: &Path, library: &str) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(dir) else {
            tracing::debug!(dir = %dir.display(), "artifact directory not readable, skipping");
            return Vec::new();
        };

        let mut found: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| artifact_matches(library, name))
            })
            .collect();
        found.sort();
        found
    }
}

impl ArtifactResolver for DirectoryResolver {
    fn resolve(&self, library: &str) -> Result<PathBuf> {
        self.dirs
            .iter()
            .find_map(|dir| Self::candidates(dir, library).pop())
            .ok_or_else(|| Error::ArtifactNotFound {
                library: library.to_string(),
                searched: self.dirs.clone(),
            })
    }
}

fn artifact_matches(library: &str, file_name: &str) -> bool {
    let Some(stem) = file_name.strip_suffix(".jar") else {
        return false;
    };
    if stem == library {
        return true;
    }
    stem.strip_prefix(library)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|version| version.starts_with(|c: char| c.is_ascii_digit()))
}
