//! The end-to-end packaging run

use crate::artifacts::ArtifactResolver;
use crate::assemble::{
    AssemblyInput, ClusterConfigFiles, InstallLayout, PackageAssembler, StagingDirectory,
    StepReport, check_environment,
};
use crate::budget::ResourceBudget;
use crate::config::{
    ConfigResolver, ConfigSource, Configuration, Layer, ResolvedConfig, apply_options,
    merge_server_properties,
};
use crate::diagnostics::Diagnostics;
use crate::framework::FrameworkFetcher;
use crate::manifest::Manifest;
use crate::options::{PackageEnvironment, PackageOptions};
use crate::Result;
use llap_fs::{FileSystem, ResourceLocator};
use llap_meta::DaemonKeyRegistry;

/// Everything settled before the first byte is written.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Working configuration after every stage.
    pub conf: Configuration,
    pub files: ClusterConfigFiles,
    pub install: InstallLayout,
    pub profile: ConfigSource,
    pub direct: ConfigSource,
    pub budget: ResourceBudget,
    pub resolved: ResolvedConfig,
    /// Manifest values, without the Java home.
    pub manifest: Manifest,
    pub diagnostics: Diagnostics,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub staging: StagingDirectory,
    pub resolved: ResolvedConfig,
    pub manifest: Manifest,
    pub steps: StepReport,
    pub diagnostics: Diagnostics,
}

/// Drives one packaging run.
pub struct PackageBuilder<'a> {
    env: &'a PackageEnvironment,
    fs: &'a dyn FileSystem,
    artifacts: &'a dyn ArtifactResolver,
    framework: &'a dyn FrameworkFetcher,
    registry: DaemonKeyRegistry,
}

impl<'a> PackageBuilder<'a> {
    pub fn new(
        env: &'a PackageEnvironment,
        fs: &'a dyn FileSystem,
        artifacts: &'a dyn ArtifactResolver,
        framework: &'a dyn FrameworkFetcher,
    ) -> Self {
        Self {
            env,
            fs,
            artifacts,
            framework,
            registry: DaemonKeyRegistry::with_builtins(),
        }
    }

    /// Load, merge, validate and resolve the configuration.
    ///
    /// Only reads: a failure here leaves the staging directory untouched.
    pub fn resolve(&self, options: &PackageOptions) -> Result<Resolution> {
        let locator = ResourceLocator::new(self.env.conf_dirs.iter());
        let files = ClusterConfigFiles::discover(&locator)?;
        let conf = Configuration::load(&files)?;

        let (conf, mut diagnostics) =
            merge_server_properties(conf, &options.hiveconf, &self.registry);
        let (conf, direct, budget) = apply_options(conf, options)?;

        let install = check_environment(
            &locator,
            self.env.home.as_deref(),
            self.fs,
            &mut diagnostics,
        )?;

        let profile = ConfigSource::with_entries(Layer::Profile, options.hiveconf.clone());
        let resolved = ConfigResolver::new(&self.registry).resolve(&conf, &[&profile, &direct]);
        tracing::debug!(keys = resolved.len(), "resolved daemon configuration");

        let manifest = Manifest::build(&conf, &budget)?;

        Ok(Resolution {
            conf,
            files,
            install,
            profile,
            direct,
            budget,
            resolved,
            manifest,
            diagnostics,
        })
    }

    /// Resolve, then assemble the staging directory.
    pub fn build(&self, options: &PackageOptions) -> Result<PackageReport> {
        let Resolution {
            conf,
            files,
            install,
            resolved,
            manifest,
            mut diagnostics,
            ..
        } = self.resolve(options)?;

        let staging = StagingDirectory::new(&options.directory);
        let input = AssemblyInput {
            staging: &staging,
            conf: &conf,
            resolved: &resolved,
            manifest: &manifest,
            files: &files,
            install: &install,
            options,
            java_home_env: self.env.java_home_env.as_deref(),
            java_installation: self.env.java_installation.as_deref(),
        };
        let assembly = PackageAssembler::new(self.fs, self.artifacts, self.framework)
            .assemble(&input, &mut diagnostics)?;

        tracing::debug!(
            staging = %staging.root().display(),
            steps = assembly.steps.completed.len(),
            skipped = assembly.steps.skipped.len(),
            "package assembled"
        );

        Ok(PackageReport {
            staging,
            resolved,
            manifest: assembly.manifest,
            steps: assembly.steps,
            diagnostics,
        })
    }
}
