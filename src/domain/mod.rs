//! Domain layer for the catalog data-access system
//!
//! This module contains core business models, errors, and port traits.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{DomainError, DomainResult};
