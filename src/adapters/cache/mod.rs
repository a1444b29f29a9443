//! In-memory caching layer for hot-path repository reads.
//!
//! Uses `moka` for TTL-based concurrent caching with write-through
//! invalidation. Wraps repository traits as decorators.

pub mod cached_category_repository;
pub mod moka_cache;

pub use cached_category_repository::CachedCategoryRepository;
pub use moka_cache::MokaCache;
