//! Configuration model and resolution
//!
//! A run works with three layers of configuration, in increasing precedence:
//!
//! 1. **Base** - the cluster configuration files found on the search path
//! 2. **Profile** - `--hiveconf key=value` properties from the command line
//! 3. **Direct** - values computed from sizing options (`--size`, `--cache`,
//!    `--xmx`, `--executors`, `--name`)
//!
//! The working [`Configuration`] is threaded by value through each stage:
//! loaded from the base files, extended by [`merge_server_properties`],
//! extended again by [`apply_options`], and finally filtered by
//! [`ConfigResolver`] into the [`ResolvedConfig`] written for the daemon.

mod configuration;
mod direct;
mod resolver;
mod source;

pub use configuration::Configuration;
pub use direct::apply_options;
pub use resolver::{ConfigResolver, ResolvedConfig, ResolvedEntry, merge_server_properties};
pub use source::{ConfigSource, Layer};
