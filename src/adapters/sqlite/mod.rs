//! SQLite adapters for the catalog data-access layer.

pub mod category_repository;
pub mod connection;
pub mod item_repository;
pub mod migrations;

pub use category_repository::SqliteCategoryRepository;
pub use connection::{create_pool, create_test_pool, verify_connection, ConnectionError};
pub use item_repository::SqliteItemRepository;
pub use migrations::{all_embedded_migrations, Migration, MigrationError, Migrator};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::DatabaseConfig;

/// Parse an RFC3339 datetime string from a SQLite row field.
pub(crate) fn parse_datetime(s: &str) -> DomainResult<DateTime<Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| DomainError::StorageUnavailable(format!("corrupt datetime column: {e}")))
        .map(|dt| dt.with_timezone(&Utc))
}

/// Map a sqlx error to the domain taxonomy, treating a storage-level
/// unique-constraint rejection as a duplicate of `name`.
///
/// The repository's own name pre-check is advisory; under concurrency the
/// `UNIQUE` constraint on `categories.name` is the authoritative guard, and
/// its rejection must surface as the same error kind.
pub(crate) fn map_unique_violation(err: sqlx::Error, name: &str) -> DomainError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        return DomainError::DuplicateName(name.to_string());
    }
    storage_error(err)
}

/// Map a sqlx error, treating a foreign-key rejection as a dangling
/// `category_id` reference.
pub(crate) fn map_fk_violation(err: sqlx::Error, category_id: i64) -> DomainError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
    {
        return DomainError::ForeignKeyViolation(category_id);
    }
    storage_error(err)
}

pub(crate) fn storage_error(err: sqlx::Error) -> DomainError {
    DomainError::StorageUnavailable(err.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),
    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),
}

/// Open the configured database and bring its schema up to date.
pub async fn initialize_database(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let pool = create_pool(config).await?;
    let migrator = Migrator::new(pool.clone());
    migrator
        .run_embedded_migrations(all_embedded_migrations())
        .await?;
    Ok(pool)
}

/// Create an in-memory test pool with all migrations applied.
pub async fn create_migrated_test_pool() -> Result<SqlitePool, DatabaseError> {
    let pool = create_test_pool().await?;
    let migrator = Migrator::new(pool.clone());
    migrator
        .run_embedded_migrations(all_embedded_migrations())
        .await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_database_creates_file_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir
                .path()
                .join("nested")
                .join("catalog.db")
                .to_string_lossy()
                .into_owned(),
            max_connections: 2,
        };

        let pool = initialize_database(&config).await.unwrap();
        verify_connection(&pool).await.unwrap();

        let migrator = Migrator::new(pool.clone());
        assert_eq!(migrator.get_current_version().await.unwrap(), 1);

        // Re-running migrations is a no-op.
        let applied = migrator
            .run_embedded_migrations(all_embedded_migrations())
            .await
            .unwrap();
        assert_eq!(applied, 0);
    }
}
