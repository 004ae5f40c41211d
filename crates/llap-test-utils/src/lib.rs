//! Shared test fixtures for the llap-package workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`cluster`]: [`TestCluster`](cluster::TestCluster), a temporary build
//!   host with cluster configuration, an installation root and a framework
//!   bundle

pub mod cluster;
