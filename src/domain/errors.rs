//! Domain errors for the catalog data-access layer.

use thiserror::Error;

/// Domain-level errors surfaced by repository operations.
///
/// Every variant is recoverable from the caller's point of view: the
/// repository never retries on its own, and each write is a single storage
/// call, so storage is never left partially mutated.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Item not found: {0}")]
    ItemNotFound(i64),

    #[error("A category named {0:?} already exists")]
    DuplicateName(String),

    #[error("Category {0} still has items and cannot be deleted")]
    HasDependents(i64),

    #[error("Item references a nonexistent category: {0}")]
    ForeignKeyViolation(i64),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
