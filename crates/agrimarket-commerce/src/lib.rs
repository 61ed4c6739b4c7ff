//! E-commerce domain types and logic for the AgriMarket marketplace.
//!
//! This crate provides the state that backs a marketplace screen:
//!
//! - **Catalog**: a validated, immutable set of products and categories
//! - **Category filter**: a pure function narrowing the catalog to one category
//! - **Cart**: session-scoped cart with toggle add/remove, quantity
//!   adjustment, and totals derived on demand
//!
//! The rendering layer, persistence, and any network collaborators live
//! outside this crate; it exposes an in-process call interface only.
//!
//! # Example
//!
//! ```rust
//! use agrimarket_commerce::prelude::*;
//!
//! let catalog = Catalog::agrimarket_seed();
//! let vegetables = catalog.filter(&CategoryId::new("vegetables"));
//!
//! let mut cart = Cart::new();
//! cart.toggle_item(&vegetables[0]);
//! cart.set_quantity(&vegetables[0].id, 2);
//!
//! let totals = cart.totals();
//! assert_eq!(totals.item_count, 3);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{filter_by_category, Catalog, Category, Product, ProductRecord};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals, LineTotal};
}
