//! Error types for llap-core

use crate::budget::BudgetError;
use std::path::PathBuf;

/// Result type for llap-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a packaging run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required cluster configuration file is not on the search path
    #[error("Unable to find required config file: {name}")]
    MissingConfig { name: String },

    /// The daemon logging configuration is not on the search path
    #[error("Unable to find required config file: {name}")]
    MissingLoggingConfig { name: String },

    /// No installation root was given
    #[error("Installation root is not set; pass --home or set HIVE_HOME")]
    HomeNotConfigured,

    /// The installation root does not exist
    #[error("Unable to find HIVE_HOME: {path}")]
    HomeNotFound { path: PathBuf },

    /// Requested sizing is inconsistent or below the cluster minimum
    #[error(transparent)]
    Budget(#[from] BudgetError),

    /// A configuration value could not be parsed
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// No Java installation could be determined
    #[error(
        "Could not determine JAVA_HOME from command line parameters, environment or the java on PATH"
    )]
    JavaHomeUnresolved,

    /// The execution framework location is not configured
    #[error("Missing {key}; cannot locate the execution framework libraries")]
    FrameworkUriMissing { key: String },

    /// The execution framework location uses a scheme we cannot read
    #[error("Unsupported filesystem scheme in {uri}; only local paths and file:// URIs can be fetched")]
    UnsupportedScheme { uri: String },

    /// Unpacking the execution framework bundle failed
    #[error("Extracting {archive} failed: {message}")]
    ExtractFailed { archive: PathBuf, message: String },

    /// No packaging artifact backs a library identifier
    #[error("Cannot find a jar for [{library}] in {searched:?}")]
    ArtifactNotFound {
        library: String,
        searched: Vec<PathBuf>,
    },

    /// The explicitly requested storage integration could not be staged
    #[error("Failed to add HBase jars. Use --auxhbase=false to avoid localizing them: {source}")]
    StorageIntegration {
        #[source]
        source: Box<Error>,
    },

    /// A mandatory assembly step failed
    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: Box<Error>,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from llap-fs
    #[error(transparent)]
    Fs(#[from] llap_fs::Error),

    /// Metadata error from llap-meta
    #[error(transparent)]
    Meta(#[from] llap_meta::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
