//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// The reserved wildcard category id meaning "no filter".
pub const WILDCARD_CATEGORY: &str = "all";

impl CategoryId {
    /// The wildcard id that selects every product.
    pub fn wildcard() -> Self {
        Self::new(WILDCARD_CATEGORY)
    }

    /// Check whether this is the wildcard id.
    pub fn is_wildcard(&self) -> bool {
        self.as_str() == WILDCARD_CATEGORY
    }
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Check whether this is the wildcard category.
    pub fn is_wildcard(&self) -> bool {
        self.id.is_wildcard()
    }

    /// The standard AgriMarket category set, wildcard first.
    pub fn defaults() -> Vec<Category> {
        vec![
            Category::new(WILDCARD_CATEGORY, "All"),
            Category::new("vegetables", "Vegetables"),
            Category::new("fruits", "Fruits"),
            Category::new("seeds", "Seeds"),
            Category::new("supplies", "Supplies"),
        ]
    }
}
