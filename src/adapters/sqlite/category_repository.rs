//! SQLite implementation of the CategoryRepository.
//!
//! Invariant checks (name uniqueness, the referential guard on delete) run
//! as separate storage round-trips before the write. They are fast-path
//! pre-checks for friendly errors; the schema's `UNIQUE` and `FOREIGN KEY`
//! constraints remain the authoritative guards under concurrency, and their
//! rejections map to the same error kinds.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Category, NewCategory};
use crate::domain::ports::CategoryRepository;

use super::item_repository::ItemRow;
use super::{map_unique_violation, parse_datetime, storage_error};

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// True if a category other than `exclude_id` already holds `name`.
    async fn name_taken(&self, name: &str, exclude_id: Option<i64>) -> DomainResult<bool> {
        let taken: bool = match exclude_id {
            Some(id) => {
                sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM categories WHERE name = ? AND id != ?)",
                )
                .bind(name)
                .bind(id)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE name = ?)")
                    .bind(name)
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(storage_error)?;

        Ok(taken)
    }

    async fn has_items(&self, category_id: i64) -> DomainResult<bool> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE category_id = ?)")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            "SELECT id, name, description, date_added FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Category>> {
        let row: Option<CategoryRow> = sqlx::query_as(
            "SELECT id, name, description, date_added FROM categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut category: Category = row.try_into()?;

        let item_rows: Vec<ItemRow> = sqlx::query_as(
            "SELECT id, category_id, name, short_description, long_description, price,
                    allergy_information, image_url, image_thumbnail_url, in_stock, is_featured
             FROM items WHERE category_id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        category.items = item_rows.into_iter().map(Into::into).collect();
        Ok(Some(category))
    }

    async fn add(&self, category: &NewCategory) -> DomainResult<i64> {
        if self.name_taken(&category.name, None).await? {
            return Err(DomainError::DuplicateName(category.name.clone()));
        }

        let result = sqlx::query(
            "INSERT INTO categories (name, description, date_added) VALUES (?, ?, ?)",
        )
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.date_added.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &category.name))?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, category: &Category) -> DomainResult<()> {
        // Excluding the category's own id allows a no-op rename.
        if self.name_taken(&category.name, Some(category.id)).await? {
            return Err(DomainError::DuplicateName(category.name.clone()));
        }

        let result = sqlx::query("UPDATE categories SET name = ?, description = ? WHERE id = ?")
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, &category.name))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CategoryNotFound(category.id));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        if self.has_items(id).await? {
            return Err(DomainError::HasDependents(id));
        }

        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // An item inserted between the pre-check and the delete
                // trips the FK constraint; same outcome as the pre-check.
                if e.as_database_error()
                    .is_some_and(|db| db.is_foreign_key_violation())
                {
                    DomainError::HasDependents(id)
                } else {
                    storage_error(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CategoryNotFound(id));
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    description: String,
    date_added: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: row.id,
            name: row.name,
            description: row.description,
            date_added: parse_datetime(&row.date_added)?,
            items: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::create_migrated_test_pool;

    async fn setup_test_repo() -> SqliteCategoryRepository {
        let pool = create_migrated_test_pool().await.unwrap();
        SqliteCategoryRepository::new(pool)
    }

    #[tokio::test]
    async fn test_add_and_get_category() {
        let repo = setup_test_repo().await;
        let draft = NewCategory::new("Fruit Pies", "All fruit pies");

        let id = repo.add(&draft).await.unwrap();

        let retrieved = repo.get(id).await.unwrap().unwrap();
        assert_eq!(retrieved.id, id);
        assert_eq!(retrieved.name, "Fruit Pies");
        assert_eq!(retrieved.description, "All fruit pies");
        assert!(retrieved.items.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_category_is_none() {
        let repo = setup_test_repo().await;
        assert!(repo.get(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = setup_test_repo().await;
        repo.add(&NewCategory::new("Cheese Cakes", "")).await.unwrap();
        repo.add(&NewCategory::new("Apple Pies", "")).await.unwrap();

        let categories = repo.list().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert!(categories[0].id < categories[1].id);
        assert_eq!(categories[0].name, "Cheese Cakes");
    }

    #[tokio::test]
    async fn test_add_duplicate_name_fails() {
        let repo = setup_test_repo().await;
        repo.add(&NewCategory::new("Apple Pie", "")).await.unwrap();

        let err = repo.add(&NewCategory::new("Apple Pie", "again")).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateName(name) if name == "Apple Pie"));

        let categories = repo.list().await.unwrap();
        assert_eq!(categories.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_check_is_case_sensitive() {
        let repo = setup_test_repo().await;
        repo.add(&NewCategory::new("Apple Pie", "")).await.unwrap();

        // Different case is a different name, as stored.
        repo.add(&NewCategory::new("apple pie", "")).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_renames_and_keeps_date_added() {
        let repo = setup_test_repo().await;
        let id = repo.add(&NewCategory::new("Old Name", "desc")).await.unwrap();
        let original = repo.get(id).await.unwrap().unwrap();

        let mut category = original.clone();
        category.name = "New Name".to_string();
        category.description = "new desc".to_string();
        repo.update(&category).await.unwrap();

        let updated = repo.get(id).await.unwrap().unwrap();
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.description, "new desc");
        assert_eq!(updated.date_added, original.date_added);
    }

    #[tokio::test]
    async fn test_update_allows_noop_rename() {
        let repo = setup_test_repo().await;
        let id = repo.add(&NewCategory::new("Keep", "a")).await.unwrap();

        let mut category = repo.get(id).await.unwrap().unwrap();
        category.description = "b".to_string();
        repo.update(&category).await.unwrap();

        assert_eq!(repo.get(id).await.unwrap().unwrap().description, "b");
    }

    #[tokio::test]
    async fn test_update_rejects_name_held_by_other() {
        let repo = setup_test_repo().await;
        repo.add(&NewCategory::new("Taken", "")).await.unwrap();
        let id = repo.add(&NewCategory::new("Mine", "")).await.unwrap();

        let mut category = repo.get(id).await.unwrap().unwrap();
        category.name = "Taken".to_string();
        let err = repo.update(&category).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateName(_)));
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let repo = setup_test_repo().await;
        let category = Category {
            id: 42,
            name: "Ghost".to_string(),
            description: String::new(),
            date_added: chrono::Utc::now(),
            items: Vec::new(),
        };

        let err = repo.update(&category).await.unwrap_err();
        assert!(matches!(err, DomainError::CategoryNotFound(42)));
    }

    #[tokio::test]
    async fn test_delete_missing_category_is_not_found() {
        let repo = setup_test_repo().await;
        let err = repo.delete(404).await.unwrap_err();
        assert!(matches!(err, DomainError::CategoryNotFound(404)));
    }

    #[tokio::test]
    async fn test_delete_empty_category_succeeds() {
        let repo = setup_test_repo().await;
        let id = repo.add(&NewCategory::new("Empty", "")).await.unwrap();

        repo.delete(id).await.unwrap();
        assert!(repo.get(id).await.unwrap().is_none());
    }
}
