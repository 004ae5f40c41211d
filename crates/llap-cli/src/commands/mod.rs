//! Command implementations

mod package;

pub use package::run_package;
