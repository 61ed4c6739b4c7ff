//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading and validating a catalog.
///
/// Cart operations are total functions and never produce errors; the
/// catalog-load boundary is where malformed records are stopped.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product price is negative or unparseable.
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: String, price: String },

    /// Two products share the same ID.
    #[error("Duplicate product ID: {0}")]
    DuplicateProduct(String),

    /// Product references a category that is not in the catalog's set.
    #[error("Unknown category {category} for product {id}")]
    UnknownCategory { id: String, category: String },

    /// Product claims the reserved wildcard category.
    #[error("Category \"{0}\" is reserved and cannot be assigned to a product")]
    ReservedCategory(String),

    /// Products in one catalog use different currencies.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
