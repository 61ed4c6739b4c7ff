//! Catalog loading, validation, and category filtering.
//!
//! A [`Catalog`] is built once from product records, validated, and never
//! mutated afterwards. Display layers narrow it with [`filter_by_category`].

use crate::catalog::{Category, Product};
use crate::error::CatalogError;
use crate::ids::{CategoryId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A raw product record as supplied by a catalog source.
///
/// This is the loose shape the surrounding app ships (price as a display
/// string such as `"₹75"`); [`Catalog::from_records`] normalizes it into
/// well-typed [`Product`] values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    /// Unique product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display price, e.g. `"₹75"` or `"120.50"`.
    pub price: String,
    /// Category key.
    pub category: String,
    /// Image URL for display.
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    /// Longer description for display.
    #[serde(default)]
    pub description: Option<String>,
}

/// The full, static set of purchasable products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from already-typed products.
    ///
    /// Validation rules:
    /// - prices must be non-negative,
    /// - product ids must be unique,
    /// - every product category must be a non-wildcard member of
    ///   `categories`,
    /// - all products must share one currency.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let known: HashSet<&str> = categories
            .iter()
            .filter(|c| !c.is_wildcard())
            .map(|c| c.id.as_str())
            .collect();

        let mut seen = HashSet::new();
        let mut currency: Option<Currency> = None;

        for product in &products {
            if product.price.is_negative() {
                return Err(CatalogError::InvalidPrice {
                    id: product.id.to_string(),
                    price: product.price.display(),
                });
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.to_string()));
            }
            if product.category.is_wildcard() {
                return Err(CatalogError::ReservedCategory(product.category.to_string()));
            }
            if !known.contains(product.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    id: product.id.to_string(),
                    category: product.category.to_string(),
                });
            }
            match currency {
                None => currency = Some(product.price.currency),
                Some(expected) if expected != product.price.currency => {
                    return Err(CatalogError::CurrencyMismatch {
                        expected: expected.code().to_string(),
                        got: product.price.currency.code().to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            products,
            categories,
        })
    }

    /// Build a catalog from raw records, parsing display prices.
    pub fn from_records(
        records: Vec<ProductRecord>,
        categories: Vec<Category>,
    ) -> Result<Self, CatalogError> {
        let products = records
            .into_iter()
            .map(|record| {
                let price = Money::parse_display(&record.price, Currency::default()).ok_or(
                    CatalogError::InvalidPrice {
                        id: record.id.clone(),
                        price: record.price.clone(),
                    },
                )?;
                let mut product = Product::new(record.id, record.name, price, record.category);
                product.image_url = record.image_url;
                product.description = record.description;
                Ok(product)
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Self::new(products, categories)
    }

    /// Build a catalog from a JSON array of raw records.
    pub fn from_json(json: &str, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        Self::from_records(records, categories)
    }

    /// All products, in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, including the wildcard.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The catalog currency. Defaults to INR for an empty catalog.
    pub fn currency(&self) -> Currency {
        self.products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default()
    }

    /// Narrow the catalog to one category. See [`filter_by_category`].
    pub fn filter(&self, category: &CategoryId) -> Vec<Product> {
        filter_by_category(&self.products, category)
    }

    /// The built-in AgriMarket catalog: 20 products across the default
    /// category set.
    pub fn agrimarket_seed() -> Self {
        const SEED: &[(&str, &str, i64, &str)] = &[
            ("product-1", "Carrot", 7500, "vegetables"),
            ("product-2", "Broccoli", 12000, "vegetables"),
            ("product-3", "Tomato", 6000, "vegetables"),
            ("product-4", "Spinach", 4000, "vegetables"),
            ("product-5", "Bell Pepper", 8000, "vegetables"),
            ("product-6", "Apple", 10000, "fruits"),
            ("product-7", "Banana", 5000, "fruits"),
            ("product-8", "Orange", 8000, "fruits"),
            ("product-9", "Strawberry", 20000, "fruits"),
            ("product-10", "Blueberry", 25000, "fruits"),
            ("product-11", "Sunflower Seeds", 15000, "seeds"),
            ("product-12", "Pumpkin Seeds", 18000, "seeds"),
            ("product-13", "Chia Seeds", 22000, "seeds"),
            ("product-14", "Flax Seeds", 20000, "seeds"),
            ("product-15", "Sesame Seeds", 13000, "seeds"),
            ("product-16", "Garden Gloves", 35000, "supplies"),
            ("product-17", "Watering Can", 45000, "supplies"),
            ("product-18", "Pruning Shears", 40000, "supplies"),
            ("product-19", "Plant Food", 25000, "supplies"),
            ("product-20", "Garden Trowel", 30000, "supplies"),
        ];

        let products = SEED
            .iter()
            .map(|(id, name, paise, category)| {
                Product::new(*id, *name, Money::new(*paise, Currency::INR), *category)
            })
            .collect();

        Self::new(products, Category::defaults()).expect("seed catalog is valid")
    }
}

/// Narrow a catalog to the products in one category.
///
/// The wildcard id returns the full catalog unchanged; a concrete id
/// returns exactly the products with that category, in input order; an id
/// matching nothing returns an empty vec. Pure, no side effects.
pub fn filter_by_category(catalog: &[Product], category: &CategoryId) -> Vec<Product> {
    if category.is_wildcard() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|p| p.is_in_category(category))
        .cloned()
        .collect()
}
