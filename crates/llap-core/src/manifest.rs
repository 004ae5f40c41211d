//! The manifest read by the launch tooling
//!
//! A flat JSON object of scalars at the staging root. Every field is always
//! present; numeric values that were never configured are `-1`.

use crate::budget::{ResourceBudget, UNSET};
use crate::config::Configuration;
use crate::{Error, Result};
use llap_fs::{FileSystem, io};
use llap_meta::vars;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the manifest inside the staging directory.
pub const MANIFEST_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "java.home")]
    pub java_home: String,

    #[serde(rename = "hive.llap.daemon.yarn.container.mb")]
    pub container_mb: i64,

    /// Cache size in bytes.
    #[serde(rename = "hive.llap.io.memory.size")]
    pub cache_bytes: i64,

    #[serde(rename = "hive.llap.io.allocator.direct")]
    pub direct_allocator: bool,

    #[serde(rename = "hive.llap.daemon.memory.per.instance.mb")]
    pub memory_per_instance_mb: i64,

    #[serde(rename = "hive.llap.daemon.vcpus.per.instance")]
    pub vcpus_per_instance: i64,

    #[serde(rename = "hive.llap.daemon.num.executors")]
    pub num_executors: i64,

    #[serde(rename = "yarn.scheduler.minimum-allocation-mb")]
    pub min_allocation_mb: i64,

    #[serde(rename = "yarn.scheduler.minimum-allocation-vcores")]
    pub min_allocation_vcores: i64,
}

impl Manifest {
    /// Collect the manifest values from the final working configuration.
    ///
    /// The container size comes from the validated budget rather than the
    /// configuration, so a container size inherited from a cluster file is
    /// reported as unset unless it was requested for this run. The Java home
    /// is left empty until [`Manifest::with_java_home`] fills it in.
    pub fn build(conf: &Configuration, budget: &ResourceBudget) -> Result<Self> {
        let int = |key: &str| -> Result<i64> { Ok(conf.get_i64(key)?.unwrap_or(UNSET)) };

        Ok(Self {
            java_home: String::new(),
            container_mb: budget.container_mb(),
            cache_bytes: conf.get_size(vars::IO_MEMORY_MAX_SIZE)?.unwrap_or(UNSET),
            direct_allocator: budget.direct_allocator,
            memory_per_instance_mb: int(vars::DAEMON_MEMORY_PER_INSTANCE_MB)?,
            vcpus_per_instance: int(vars::DAEMON_VCPUS_PER_INSTANCE)?,
            num_executors: int(vars::DAEMON_NUM_EXECUTORS)?,
            min_allocation_mb: int(vars::RM_SCHEDULER_MINIMUM_ALLOCATION_MB)?,
            min_allocation_vcores: int(vars::RM_SCHEDULER_MINIMUM_ALLOCATION_VCORES)?,
        })
    }

    pub fn with_java_home(mut self, java_home: impl Into<String>) -> Self {
        self.java_home = java_home.into();
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest; the write replaces the file atomically.
    pub fn write(&self, fs: &dyn FileSystem, path: &Path) -> Result<()> {
        fs.write(path, self.to_json()?.as_bytes())?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = io::read_text(path)?;
        serde_json::from_str(&content).map_err(Error::from)
    }
}
