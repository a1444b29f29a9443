//! Catalog repository - cached data-access layer for a category/item catalog
//!
//! Serves reads from an in-memory cache where it pays off, writes through to
//! durable SQLite storage, and keeps cache and storage consistent after every
//! mutation while enforcing two domain invariants: category names are unique,
//! and a category with items cannot be deleted.
//!
//! # Architecture
//!
//! The crate follows Hexagonal Architecture:
//!
//! - **Domain Layer** (`domain`): models, error taxonomy, and port traits
//! - **Adapters** (`adapters`): SQLite repositories and the moka-backed
//!   cache with its cached-repository decorator
//! - **Infrastructure** (`infrastructure`): configuration and logging
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use catalog_repository::adapters::cache::{CachedCategoryRepository, MokaCache};
//! use catalog_repository::adapters::sqlite::{initialize_database, SqliteCategoryRepository};
//! use catalog_repository::domain::ports::CategoryRepository;
//! use catalog_repository::infrastructure::config::ConfigLoader;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let pool = initialize_database(&config.database).await?;
//!     let categories = CachedCategoryRepository::with_ttl(
//!         Arc::new(SqliteCategoryRepository::new(pool)),
//!         Arc::new(MokaCache::new()),
//!         config.cache.list_ttl(),
//!     );
//!     let all = categories.list().await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::cache::{CachedCategoryRepository, MokaCache};
pub use adapters::sqlite::{SqliteCategoryRepository, SqliteItemRepository};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    CacheConfig, Category, Config, DatabaseConfig, Item, LoggingConfig, NewCategory, NewItem,
};
pub use domain::ports::{Cache, CategoryRepository, ItemRepository, NullCache};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::init_logging;
