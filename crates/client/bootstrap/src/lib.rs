//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, oracle and score store selection, and
//! service setup that can be reused by the CLI or any other front-end.
pub mod builder;
pub mod config;
pub mod dirs;

pub use builder::{ServiceBuilder, ServiceSetup};
pub use config::{OracleConfig, OracleKind, ServiceConfig, StorageConfig};
