//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - env-filter driven levels (`RUST_LOG` overrides the configured level)
//! - JSON or pretty stdout formatting

pub mod logger;

pub use logger::init_logging;
