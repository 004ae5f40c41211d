//! Filesystem capability for the LLAP package builder
//!
//! Provides the local filesystem operations the packaging pipeline is allowed
//! to perform, lookup of configuration resources on a search path, and
//! loading/saving of flat property documents.

pub mod error;
pub mod filesystem;
pub mod io;
pub mod properties;
pub mod resources;

pub use error::{Error, Result};
pub use filesystem::{FileSystem, LocalFs};
pub use properties::{Properties, PropertyStore};
pub use resources::ResourceLocator;
