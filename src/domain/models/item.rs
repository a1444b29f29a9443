//! Item domain model.

use serde::{Deserialize, Serialize};

/// A catalog item, always owned by exactly one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Storage-assigned identity. Immutable after creation.
    pub id: i64,
    /// Foreign key to the owning category. Storage enforces that the
    /// referenced category exists.
    pub category_id: i64,
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    /// Non-negative, storage-enforced.
    pub price: f64,
    pub allergy_information: String,
    pub image_url: String,
    pub image_thumbnail_url: String,
    pub in_stock: bool,
    pub is_featured: bool,
}

/// Input shape for creating an item. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    pub price: f64,
    #[serde(default)]
    pub allergy_information: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub image_thumbnail_url: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub is_featured: bool,
}

const fn default_in_stock() -> bool {
    true
}

impl NewItem {
    /// Create a draft item with the required fields; the rest default to
    /// empty, in stock, not featured.
    pub fn new(category_id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            category_id,
            name: name.into(),
            short_description: String::new(),
            long_description: String::new(),
            price,
            allergy_information: String::new(),
            image_url: String::new(),
            image_thumbnail_url: String::new(),
            in_stock: true,
            is_featured: false,
        }
    }
}
