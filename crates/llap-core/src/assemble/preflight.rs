//! Checks that run before anything is written

use crate::diagnostics::Diagnostics;
use crate::{Error, Result};
use llap_fs::{FileSystem, ResourceLocator};
use std::path::{Path, PathBuf};

/// Cluster configuration files a daemon cannot start without, in load order.
pub const REQUIRED_CONFIGS: &[&str] = &[
    "core-site.toml",
    "hdfs-site.toml",
    "yarn-site.toml",
    "tez-site.toml",
    "hive-site.toml",
];

/// Staged when present.
pub const OPTIONAL_CONFIGS: &[&str] = &["ssl-server.toml"];

/// Logging configuration shipped with the daemon.
pub const LOGGING_CONFIG: &str = "llap-daemon-log4j2.properties";

/// The cluster configuration files found on the search path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterConfigFiles {
    required: Vec<PathBuf>,
    optional: Vec<PathBuf>,
}

impl ClusterConfigFiles {
    /// Locate every required file (failing on the first one missing) and
    /// whichever optional files exist.
    pub fn discover(locator: &ResourceLocator) -> Result<Self> {
        let required = REQUIRED_CONFIGS
            .iter()
            .map(|name| {
                locator.find(name).ok_or_else(|| Error::MissingConfig {
                    name: name.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let optional = OPTIONAL_CONFIGS
            .iter()
            .filter_map(|name| {
                let found = locator.find(name);
                if found.is_none() {
                    tracing::debug!(name, "optional config not found");
                }
                found
            })
            .collect();

        Ok(Self { required, optional })
    }

    pub fn required(&self) -> &[PathBuf] {
        &self.required
    }

    pub fn optional(&self) -> &[PathBuf] {
        &self.optional
    }

    /// Required files then optional files.
    pub fn all(&self) -> impl Iterator<Item = &PathBuf> {
        self.required.iter().chain(self.optional.iter())
    }
}

/// Locations on the build host the package is assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    pub home: PathBuf,
    pub logging_config: PathBuf,
}

/// Check the logging resource and installation root.
///
/// A missing `scripts/llap/bin` only warns: the scripts are a convenience,
/// packaging does not need them.
pub fn check_environment(
    locator: &ResourceLocator,
    home: Option<&Path>,
    fs: &dyn FileSystem,
    diagnostics: &mut Diagnostics,
) -> Result<InstallLayout> {
    let logging_config = locator
        .find(LOGGING_CONFIG)
        .ok_or_else(|| Error::MissingLoggingConfig {
            name: LOGGING_CONFIG.to_string(),
        })?;

    let home = home.ok_or(Error::HomeNotConfigured)?;
    if !fs.exists(home) {
        return Err(Error::HomeNotFound {
            path: home.to_path_buf(),
        });
    }

    let scripts = home.join("scripts").join("llap").join("bin");
    if !fs.exists(&scripts) {
        diagnostics.warn(
            scripts.display().to_string(),
            format!("Unable to find llap scripts:{}", scripts.display()),
        );
    }

    Ok(InstallLayout {
        home: home.to_path_buf(),
        logging_config,
    })
}
