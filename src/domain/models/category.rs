//! Category domain model.
//!
//! Categories own a collection of items. The `items` association is
//! materialized only on detail fetches; list fetches leave it empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Item;

/// A product category as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Storage-assigned identity. Immutable after creation.
    pub id: i64,
    /// Unique across all categories (case-sensitive, as stored).
    pub name: String,
    pub description: String,
    pub date_added: DateTime<Utc>,
    /// Items belonging to this category. Populated by detail fetches only;
    /// empty on list fetches.
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Input shape for creating a category. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub date_added: DateTime<Utc>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            date_added: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_stamps_date_added() {
        let before = Utc::now();
        let draft = NewCategory::new("Fruit Pies", "Seasonal fruit pies");
        assert_eq!(draft.name, "Fruit Pies");
        assert!(draft.date_added >= before);
    }
}
