//! Category repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Category, NewCategory};

/// Repository interface for `Category` persistence.
///
/// Callers pass fully-formed entities; input shaping (field allow-listing,
/// validation of user input) happens at the boundary layer before these
/// operations are invoked.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories ordered by id ascending, without their items.
    ///
    /// The returned sequence is a snapshot; it does not reflect mutations
    /// made by other callers after it is returned.
    async fn list(&self) -> DomainResult<Vec<Category>>;

    /// Get a category by id with its items populated.
    ///
    /// Returns `Ok(None)` when no category matches; the missing case is
    /// never an error.
    async fn get(&self, id: i64) -> DomainResult<Option<Category>>;

    /// Insert a new category and return the storage-assigned id.
    ///
    /// Fails with `DuplicateName` if another category already holds the
    /// same name (case-sensitive), performing no write.
    async fn add(&self, category: &NewCategory) -> DomainResult<i64>;

    /// Update a category's name and description. Other fields are not
    /// touched.
    ///
    /// Fails with `DuplicateName` if a *different* category holds the new
    /// name (a no-op rename is allowed), or `CategoryNotFound` if the id
    /// does not exist.
    async fn update(&self, category: &Category) -> DomainResult<()>;

    /// Delete a category by id.
    ///
    /// Fails with `HasDependents` while any item still references the
    /// category, or `CategoryNotFound` if the id does not exist.
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
