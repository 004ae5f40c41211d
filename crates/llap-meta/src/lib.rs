//! Configuration metadata for the LLAP package builder.
//!
//! Names of the configuration variables the builder reads and writes, the
//! allow-list of keys a daemon instance understands, and parsing of the
//! size strings those variables carry.

pub mod error;
pub mod keys;
pub mod size;
pub mod vars;

pub use error::{Error, Result};
pub use keys::{DaemonKeyRegistry, KeyClass};
pub use size::{MIB, parse_size};
