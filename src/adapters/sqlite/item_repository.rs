//! SQLite implementation of the ItemRepository.
//!
//! Uncached by design: item reads are transient bulk listings and do not
//! dominate read traffic the way the category list does. The `category_id`
//! foreign key is not pre-checked here; SQLite enforces it at write time.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Item, NewItem};
use crate::domain::ports::ItemRepository;

use super::{map_fk_violation, storage_error};

const ITEM_COLUMNS: &str = "id, category_id, name, short_description, long_description, price, \
                            allergy_information, image_url, image_thumbnail_url, in_stock, is_featured";

#[derive(Clone)]
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn list(&self) -> DomainResult<Vec<Item>> {
        let rows: Vec<ItemRow> =
            sqlx::query_as(&format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY id"))
                .fetch_all(&self.pool)
                .await
                .map_err(storage_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_category(&self, category_id: i64) -> DomainResult<Vec<Item>> {
        let rows: Vec<ItemRow> = sqlx::query_as(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE category_id = ? ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Item>> {
        let row: Option<ItemRow> =
            sqlx::query_as(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_error)?;

        Ok(row.map(Into::into))
    }

    async fn add(&self, item: &NewItem) -> DomainResult<i64> {
        let result = sqlx::query(
            "INSERT INTO items (category_id, name, short_description, long_description, price,
                                allergy_information, image_url, image_thumbnail_url, in_stock, is_featured)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(item.category_id)
        .bind(&item.name)
        .bind(&item.short_description)
        .bind(&item.long_description)
        .bind(item.price)
        .bind(&item.allergy_information)
        .bind(&item.image_url)
        .bind(&item.image_thumbnail_url)
        .bind(item.in_stock)
        .bind(item.is_featured)
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, item.category_id))?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, item: &Item) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE items SET category_id = ?, name = ?, short_description = ?,
                              long_description = ?, price = ?, allergy_information = ?,
                              image_url = ?, image_thumbnail_url = ?, in_stock = ?, is_featured = ?
             WHERE id = ?",
        )
        .bind(item.category_id)
        .bind(&item.name)
        .bind(&item.short_description)
        .bind(&item.long_description)
        .bind(item.price)
        .bind(&item.allergy_information)
        .bind(&item.image_url)
        .bind(&item.image_thumbnail_url)
        .bind(item.in_stock)
        .bind(item.is_featured)
        .bind(item.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, item.category_id))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ItemNotFound(item.id));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ItemNotFound(id));
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct ItemRow {
    id: i64,
    category_id: i64,
    name: String,
    short_description: String,
    long_description: String,
    price: f64,
    allergy_information: String,
    image_url: String,
    image_thumbnail_url: String,
    in_stock: bool,
    is_featured: bool,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            category_id: row.category_id,
            name: row.name,
            short_description: row.short_description,
            long_description: row.long_description,
            price: row.price,
            allergy_information: row.allergy_information,
            image_url: row.image_url,
            image_thumbnail_url: row.image_thumbnail_url,
            in_stock: row.in_stock,
            is_featured: row.is_featured,
        }
    }
}
