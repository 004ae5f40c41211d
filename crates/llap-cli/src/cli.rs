//! CLI argument parsing using clap derive

use clap::{ArgAction, Parser};
use llap_core::{PackageOptions, UNSET};
use std::path::PathBuf;

/// Build a deployable LLAP daemon package: resolve configuration, validate
/// sizing, and stage libraries, configs and a manifest into a directory.
#[derive(Parser, Debug)]
#[command(name = "llap-package")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Staging directory to populate
    #[arg(long)]
    pub directory: PathBuf,

    /// Instance name, registered as @<name> in the service hosts
    #[arg(long)]
    pub name: Option<String>,

    /// Container size, in bytes or with a suffix (4g, 512m)
    #[arg(long, value_parser = parse_size_arg)]
    pub size: Option<i64>,

    /// Cache size
    #[arg(long, value_parser = parse_size_arg)]
    pub cache: Option<i64>,

    /// Working memory (heap) size
    #[arg(long, value_parser = parse_size_arg)]
    pub xmx: Option<i64>,

    /// Number of executors
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    pub executors: Option<i64>,

    /// Java installation to record in the manifest
    #[arg(long = "javaHome")]
    pub java_home: Option<String>,

    /// Extra libraries to stage, comma separated
    #[arg(long = "auxjars")]
    pub aux_jars: Option<String>,

    /// Stage the HBase storage handler and its dependencies
    #[arg(long = "auxhbase", default_value_t = true, action = ArgAction::Set)]
    pub aux_hbase: bool,

    /// Daemon property override (repeatable)
    #[arg(long = "hiveconf", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub hiveconf: Vec<(String, String)>,

    /// Directory searched for cluster configuration (repeatable)
    #[arg(long = "conf-dir", env = "HIVE_CONF_DIR")]
    pub conf_dirs: Vec<PathBuf>,

    /// Installation root
    #[arg(long, env = "HIVE_HOME")]
    pub home: Option<PathBuf>,

    /// Directory searched for libraries (repeatable, default <home>/lib)
    #[arg(long = "lib-dir")]
    pub lib_dirs: Vec<PathBuf>,
}

impl Cli {
    pub fn package_options(&self) -> PackageOptions {
        let mut options = PackageOptions::new(&self.directory);
        options.name = self.name.clone();
        options.size = self.size.unwrap_or(UNSET);
        options.cache = self.cache.unwrap_or(UNSET);
        options.xmx = self.xmx.unwrap_or(UNSET);
        options.executors = self.executors.unwrap_or(UNSET);
        options.java_home = self.java_home.clone();
        options.aux_jars = self.aux_jars.clone();
        options.include_hbase = self.aux_hbase;
        options.hiveconf = self.hiveconf.iter().cloned().collect();
        options
    }

    /// Library search path: `--lib-dir`, else `<home>/lib`.
    pub fn library_dirs(&self) -> Vec<PathBuf> {
        if !self.lib_dirs.is_empty() {
            return self.lib_dirs.clone();
        }
        self.home.iter().map(|home| home.join("lib")).collect()
    }
}

fn parse_size_arg(value: &str) -> Result<i64, String> {
    match llap_meta::parse_size(value).map_err(|e| e.to_string())? {
        size if size < 0 => Err(format!("size must not be negative, got '{value}'")),
        size => Ok(size),
    }
}

fn parse_key_val(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, val)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), val.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{value}'")),
    }
}
