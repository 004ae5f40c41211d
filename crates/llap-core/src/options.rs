//! Inputs to a packaging run

use crate::budget::UNSET;
use llap_fs::Properties;
use std::path::PathBuf;

/// Options supplied by the command line for one packaging run.
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Staging directory to populate.
    pub directory: PathBuf,
    /// Instance name; published as the service hosts registry address.
    pub name: Option<String>,
    /// Container size in bytes, or [`UNSET`].
    pub size: i64,
    /// Cache size in bytes, or [`UNSET`].
    pub cache: i64,
    /// Working memory in bytes, or [`UNSET`].
    pub xmx: i64,
    /// Executor count, or [`UNSET`].
    pub executors: i64,
    pub java_home: Option<String>,
    /// Comma-separated extra libraries, copied verbatim.
    pub aux_jars: Option<String>,
    /// Stage the HBase storage integration and its dependencies.
    pub include_hbase: bool,
    /// `--hiveconf` properties (the profile layer).
    pub hiveconf: Properties,
}

impl PackageOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            name: None,
            size: UNSET,
            cache: UNSET,
            xmx: UNSET,
            executors: UNSET,
            java_home: None,
            aux_jars: None,
            include_hbase: false,
            hiveconf: Properties::new(),
        }
    }

    /// Non-empty entries of `aux_jars`, in order.
    pub fn aux_jar_paths(&self) -> Vec<&str> {
        self.aux_jars
            .as_deref()
            .map(|jars| jars.split(',').filter(|p| !p.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Facts about the host the package is built on.
#[derive(Debug, Clone, Default)]
pub struct PackageEnvironment {
    /// Directories searched for cluster configuration resources.
    pub conf_dirs: Vec<PathBuf>,
    /// Installation root (`HIVE_HOME`).
    pub home: Option<PathBuf>,
    /// `JAVA_HOME` as set in the environment.
    pub java_home_env: Option<String>,
    /// Installation of the `java` found on `PATH`.
    pub java_installation: Option<PathBuf>,
}

impl PackageEnvironment {
    /// Capture the Java facts from the running process.
    pub fn detect(conf_dirs: Vec<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            conf_dirs,
            home,
            java_home_env: std::env::var("JAVA_HOME").ok().filter(|v| !v.is_empty()),
            java_installation: crate::java::detect_installation(),
        }
    }
}
