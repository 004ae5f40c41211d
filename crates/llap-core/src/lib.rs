//! Configuration resolution and package assembly for LLAP daemon instances
//!
//! A packaging run turns a set of cluster configuration files and command-line
//! options into a staging directory:
//!
//! ```text
//! <directory>/
//!   lib/          framework bundle, daemon libraries, auxiliary jars
//!   conf/         cluster configuration, llap-daemon-site.toml, logging config
//!   config.json   manifest for the launch tooling
//! ```
//!
//! The run is split into a read-only [`PackageBuilder::resolve`] phase that
//! loads the configuration and validates the [`ResourceBudget`], and an
//! assembly phase that writes through a [`FileSystem`](llap_fs::FileSystem).
//! Invalid sizing is rejected before anything is created on disk.

pub mod artifacts;
pub mod assemble;
pub mod budget;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod framework;
pub mod java;
pub mod manifest;
pub mod options;
pub mod pipeline;

pub use artifacts::{ArtifactResolver, DirectoryResolver};
pub use assemble::{PackageAssembler, StagingDirectory};
pub use budget::{BudgetError, ResourceBudget, UNSET};
pub use config::{ConfigSource, Configuration, Layer, ResolvedConfig};
pub use diagnostics::{Diagnostic, Diagnostics, Level};
pub use error::{Error, Result};
pub use framework::{FrameworkFetcher, LocalBundleFetcher};
pub use manifest::Manifest;
pub use options::{PackageEnvironment, PackageOptions};
pub use pipeline::{PackageBuilder, PackageReport, Resolution};
