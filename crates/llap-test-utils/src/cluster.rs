//! [`TestCluster`] builder for packaging scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Cluster configuration files written by [`TestCluster::new`].
pub const CLUSTER_FILES: &[&str] = &[
    "core-site.toml",
    "hdfs-site.toml",
    "yarn-site.toml",
    "tez-site.toml",
    "hive-site.toml",
];

pub const LOGGING_CONFIG: &str = "llap-daemon-log4j2.properties";

/// Jars an installation ships in `<home>/lib`.
pub const INSTALLED_JARS: &[&str] = &[
    "hive-llap-common-4.0.0.jar",
    "hive-llap-tez-4.0.0.jar",
    "hive-llap-server-4.0.0.jar",
    "hive-exec-4.0.0.jar",
    "hive-hcatalog-core-4.0.0.jar",
];

/// Jars in the execution framework bundle.
pub const FRAMEWORK_JARS: &[&str] = &["tez-api-0.9.2.jar", "tez-runtime-internals-0.9.2.jar"];

/// A temporary build host:
///
/// ```text
/// <root>/conf/      cluster files + logging config
/// <root>/home/      installation root with scripts/llap/bin and lib/
/// <root>/tez/       framework bundle referenced by tez.lib.uris
/// <root>/package/   staging directory (not created)
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use llap_test_utils::cluster::TestCluster;
///
/// let mut cluster = TestCluster::new();
/// cluster.set_property("yarn-site.toml", "yarn.scheduler.minimum-allocation-mb", "64");
/// cluster.assert_file_exists("conf/yarn-site.toml");
/// ```
pub struct TestCluster {
    temp_dir: TempDir,
    files: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for TestCluster {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCluster {
    /// Create a complete host: every cluster file (tez-site pointing at the
    /// framework bundle), the logging config, the installation and its jars.
    pub fn new() -> Self {
        let mut cluster = Self {
            temp_dir: TempDir::new().unwrap(),
            files: BTreeMap::new(),
        };

        for dir in [
            cluster.conf_dir(),
            cluster.lib_dir(),
            cluster.home().join("scripts/llap/bin"),
            cluster.tez_dir(),
        ] {
            fs::create_dir_all(&dir)
                .unwrap_or_else(|e| panic!("TestCluster: failed to create {}: {e}", dir.display()));
        }

        for name in CLUSTER_FILES {
            cluster.files.insert(name.to_string(), BTreeMap::new());
            cluster.write_file(name);
        }
        let tez = format!("file://{}", cluster.tez_dir().display());
        cluster.set_property("tez-site.toml", "tez.lib.uris", &tez);

        fs::write(cluster.conf_dir().join(LOGGING_CONFIG), "status = WARN\n").unwrap();
        for jar in INSTALLED_JARS {
            cluster.add_library(jar);
        }
        for jar in FRAMEWORK_JARS {
            fs::write(cluster.tez_dir().join(jar), jar).unwrap();
        }

        cluster
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn conf_dir(&self) -> PathBuf {
        self.root().join("conf")
    }

    pub fn home(&self) -> PathBuf {
        self.root().join("home")
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.home().join("lib")
    }

    pub fn tez_dir(&self) -> PathBuf {
        self.root().join("tez")
    }

    /// Staging directory for a run. Not created by the fixture.
    pub fn staging(&self) -> PathBuf {
        self.root().join("package")
    }

    /// Set a property in one of the cluster files, creating the file if it
    /// does not exist yet.
    pub fn set_property(&mut self, file: &str, key: &str, value: &str) {
        self.files
            .entry(file.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.write_file(file);
    }

    /// Delete a file from the configuration directory.
    pub fn remove_conf(&mut self, name: &str) {
        self.files.remove(name);
        fs::remove_file(self.conf_dir().join(name))
            .unwrap_or_else(|e| panic!("TestCluster::remove_conf: {name}: {e}"));
    }

    /// Add a jar to `<home>/lib`.
    pub fn add_library(&self, file_name: &str) -> PathBuf {
        let path = self.lib_dir().join(file_name);
        fs::write(&path, file_name).unwrap();
        path
    }

    /// Delete a jar from `<home>/lib`.
    pub fn remove_library(&self, file_name: &str) {
        fs::remove_file(self.lib_dir().join(file_name))
            .unwrap_or_else(|e| panic!("TestCluster::remove_library: {file_name}: {e}"));
    }

    /// Create a jar outside the installation, for `--auxjars`.
    pub fn aux_jar(&self, file_name: &str) -> PathBuf {
        let dir = self.root().join("aux");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(file_name);
        fs::write(&path, file_name).unwrap();
        path
    }

    fn write_file(&self, name: &str) {
        let properties = self.files.get(name).cloned().unwrap_or_default();
        let content = toml::to_string(&properties)
            .unwrap_or_else(|e| panic!("TestCluster: failed to render {name}: {e}"));
        fs::write(self.conf_dir().join(name), content).unwrap();
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
