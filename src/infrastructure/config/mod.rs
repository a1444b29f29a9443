//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading (`catalog.yaml`)
//! - Environment variable overrides (`CATALOG_*`)
//! - Configuration validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
