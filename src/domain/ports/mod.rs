//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces that adapters implement:
//! - `CategoryRepository`: persistence operations for categories
//! - `ItemRepository`: persistence operations for items
//! - `Cache`: process-wide TTL cache capability
//!
//! These traits define the contracts that allow the domain to be independent
//! of specific infrastructure implementations.

pub mod cache;
pub mod category_repository;
pub mod item_repository;

pub use cache::{Cache, NullCache};
pub use category_repository::CategoryRepository;
pub use item_repository::ItemRepository;
