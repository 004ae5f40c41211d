//! Configuration-resource lookup on a search path

use std::path::PathBuf;

/// Finds named configuration resources in an ordered list of directories.
///
/// The first directory containing a regular file with the requested name
/// wins, the same way a configuration classpath is searched.
#[derive(Debug, Clone, Default)]
pub struct ResourceLocator {
    search_path: Vec<PathBuf>,
}

impl ResourceLocator {
    pub fn new<I, P>(search_path: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_path: search_path.into_iter().map(Into::into).collect(),
        }
    }

    /// The directories searched, in order.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Locate a resource by file name.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        self.search_path
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }
}
