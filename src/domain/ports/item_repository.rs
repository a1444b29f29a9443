//! Item repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Item, NewItem};

/// Repository interface for `Item` persistence.
///
/// Items are not cached: they are read in bulk only transiently and do not
/// dominate read traffic the way the category list does. Item names carry no
/// uniqueness constraint, and `category_id` existence is enforced by storage
/// rather than pre-checked here.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items ordered by id ascending.
    async fn list(&self) -> DomainResult<Vec<Item>>;

    /// List the items belonging to one category, ordered by id ascending.
    async fn list_by_category(&self, category_id: i64) -> DomainResult<Vec<Item>>;

    /// Get an item by id. Returns `Ok(None)` when no item matches.
    async fn get(&self, id: i64) -> DomainResult<Option<Item>>;

    /// Insert a new item and return the storage-assigned id.
    ///
    /// Fails with `ForeignKeyViolation` when `category_id` references no
    /// existing category.
    async fn add(&self, item: &NewItem) -> DomainResult<i64>;

    /// Replace all mutable fields of an existing item (id immutable).
    ///
    /// Fails with `ItemNotFound` if the id does not exist, or
    /// `ForeignKeyViolation` when moved to a nonexistent category.
    async fn update(&self, item: &Item) -> DomainResult<()>;

    /// Delete an item by id. Fails with `ItemNotFound` if absent.
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
