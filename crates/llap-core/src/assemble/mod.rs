//! Staging directory assembly
//!
//! The assembler copies libraries, configuration files and the manifest into
//! the staging directory. Work is grouped into [`StepRunner`]s so each piece
//! is explicitly tagged: a mandatory step aborts the run, an optional one is
//! recorded as a diagnostic and skipped.
//!
//! Nothing here validates sizing or parses manifest values; by the time a
//! [`PackageAssembler`] runs, the resource budget has been accepted and the
//! manifest built.

mod preflight;
mod steps;

pub use preflight::{
    ClusterConfigFiles, InstallLayout, LOGGING_CONFIG, OPTIONAL_CONFIGS, REQUIRED_CONFIGS,
    check_environment,
};
pub use steps::{StepKind, StepReport, StepRunner};

use crate::artifacts::ArtifactResolver;
use crate::config::{Configuration, ResolvedConfig};
use crate::diagnostics::Diagnostics;
use crate::framework::FrameworkFetcher;
use crate::java::resolve_java_home;
use crate::manifest::{MANIFEST_FILE, Manifest};
use crate::options::PackageOptions;
use crate::{Error, Result};
use llap_fs::{FileSystem, PropertyStore};
use llap_meta::vars;
use std::path::{Path, PathBuf};

/// Generated daemon configuration holding the resolved overrides.
pub const DAEMON_SITE: &str = "llap-daemon-site.toml";

/// Libraries every daemon needs.
pub const FIRST_PARTY_LIBRARIES: &[&str] = &[
    "hive-llap-common",
    "hive-llap-tez",
    "hive-llap-server",
    "hive-exec",
];

/// Libraries added for convenience (JSON serde); missing ones are skipped.
pub const DEFAULT_AUX_LIBRARIES: &[&str] = &["hive-hcatalog-core"];

pub const HBASE_HANDLER_LIBRARY: &str = "hive-hbase-handler";

/// Runtime dependencies of the HBase handler.
pub const HBASE_DEPENDENCIES: &[&str] = &[
    "hbase-common",
    "hbase-client",
    "hbase-protocol",
    "hbase-server",
    "hbase-hadoop-compat",
    "hbase-hadoop2-compat",
    "htrace-core",
    "netty-all",
    "zookeeper",
    "metrics-core",
    "protobuf-java",
    "guava",
];

/// Layout of a package on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingDirectory {
    root: PathBuf,
}

impl StagingDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.root.join("lib")
    }

    pub fn conf_dir(&self) -> PathBuf {
        self.root.join("conf")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }
}

/// Everything the assembler reads. All of it is settled before assembly
/// starts.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInput<'a> {
    pub staging: &'a StagingDirectory,
    /// Final working configuration.
    pub conf: &'a Configuration,
    pub resolved: &'a ResolvedConfig,
    /// Manifest values settled during resolution; only the Java home is
    /// added here.
    pub manifest: &'a Manifest,
    pub files: &'a ClusterConfigFiles,
    pub install: &'a InstallLayout,
    pub options: &'a PackageOptions,
    /// `JAVA_HOME` from the environment.
    pub java_home_env: Option<&'a str>,
    /// Installation of the `java` on `PATH`.
    pub java_installation: Option<&'a Path>,
}

/// Result of a successful assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub manifest: Manifest,
    pub steps: StepReport,
}

/// Builds a staging directory through injected collaborators.
pub struct PackageAssembler<'a> {
    fs: &'a dyn FileSystem,
    artifacts: &'a dyn ArtifactResolver,
    framework: &'a dyn FrameworkFetcher,
}

impl<'a> PackageAssembler<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        artifacts: &'a dyn ArtifactResolver,
        framework: &'a dyn FrameworkFetcher,
    ) -> Self {
        Self {
            fs,
            artifacts,
            framework,
        }
    }

    /// Stage libraries, settle the Java home, stage configuration, then
    /// write the manifest.
    pub fn assemble(
        &self,
        input: &AssemblyInput<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Assembly> {
        let mut steps = self.stage_libraries(input, diagnostics)?;

        let java_home = resolve_java_home(
            input.options.java_home.as_deref(),
            input.java_home_env,
            input.java_installation,
            diagnostics,
        )?;

        steps.merge(self.stage_configuration(input, diagnostics)?);

        let manifest = input.manifest.clone().with_java_home(java_home);
        manifest.write(self.fs, &input.staging.manifest_path())?;
        tracing::debug!(path = %input.staging.manifest_path().display(), "wrote manifest");

        Ok(Assembly { manifest, steps })
    }

    fn stage_libraries(
        &self,
        input: &AssemblyInput<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<StepReport> {
        let lib_dir = input.staging.lib_dir();
        let lib = lib_dir.as_path();
        let conf = input.conf;

        let mut runner = StepRunner::new()
            .mandatory("create lib directory", move || {
                Ok(self.fs.create_dir_all(lib)?)
            })
            .mandatory("framework libraries", move || {
                let uris = conf
                    .get(vars::TEZ_LIB_URIS)
                    .ok_or_else(|| Error::FrameworkUriMissing {
                        key: vars::TEZ_LIB_URIS.to_string(),
                    })?;
                self.framework.fetch_into(uris, lib)
            });

        for library in FIRST_PARTY_LIBRARIES {
            runner = runner.mandatory(format!("library {library}"), move || {
                self.stage_library(library, lib)
            });
        }

        for library in DEFAULT_AUX_LIBRARIES {
            runner = runner.optional(format!("library {library}"), move || {
                self.stage_library(library, lib)
            });
        }

        if input.options.include_hbase {
            runner = runner.mandatory("hbase integration", move || {
                std::iter::once(HBASE_HANDLER_LIBRARY)
                    .chain(HBASE_DEPENDENCIES.iter().copied())
                    .try_for_each(|library| self.stage_library(library, lib))
                    .map_err(|e| Error::StorageIntegration {
                        source: Box::new(e),
                    })
            });
        }

        for path in input.options.aux_jar_paths() {
            runner = runner.mandatory(format!("aux jar {path}"), move || {
                self.fs.copy_into(Path::new(path), lib)?;
                Ok(())
            });
        }

        runner.run(diagnostics)
    }

    fn stage_library(&self, library: &str, lib: &Path) -> Result<()> {
        let artifact = self.artifacts.resolve(library)?;
        self.fs.copy_into(&artifact, lib)?;
        Ok(())
    }

    fn stage_configuration(
        &self,
        input: &AssemblyInput<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<StepReport> {
        let conf_dir = input.staging.conf_dir();
        let dir = conf_dir.as_path();

        let mut runner = StepRunner::new().mandatory("create conf directory", move || {
            Ok(self.fs.create_dir_all(dir)?)
        });

        for file in input.files.required() {
            runner = runner.mandatory(format!("config {}", file.display()), move || {
                self.fs.copy_into(file, dir)?;
                Ok(())
            });
        }

        for file in input.files.optional() {
            runner = runner.optional(format!("config {}", file.display()), move || {
                self.fs.copy_into(file, dir)?;
                Ok(())
            });
        }

        let resolved = input.resolved;
        let logging = input.install.logging_config.as_path();
        runner
            .mandatory(DAEMON_SITE, move || {
                let site = dir.join(DAEMON_SITE);
                let content = PropertyStore::new().render(&site, &resolved.to_properties())?;
                Ok(self.fs.write(&site, content.as_bytes())?)
            })
            .mandatory("logging config", move || {
                self.fs.copy_into(logging, dir)?;
                Ok(())
            })
            .run(diagnostics)
    }
}
