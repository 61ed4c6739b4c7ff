//! Cart and line item types.

use crate::cart::{CartTotals, LineTotal};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Session-scoped: created empty, mutated through its operations, never
/// persisted. Lines keep first-toggle-in order so list rendering and test
/// assertions are deterministic. All mutation goes through `&mut self`,
/// which serializes operations against each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart, in first-toggle-in order.
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a product in or out of the cart.
    ///
    /// Absent products are inserted with quantity 1; present products are
    /// removed entirely. This mirrors the Add-to-Cart/Remove-from-Cart
    /// button duality: toggling twice restores the cart it started from.
    pub fn toggle_item(&mut self, product: &Product) {
        if let Some(pos) = self.position(&product.id) {
            self.lines.remove(pos);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Adjust the quantity of a line by `delta`, clamped to a minimum of 1.
    ///
    /// A line never disappears through this path no matter how negative
    /// `delta` is; removal is [`Cart::remove_item`]'s job. An absent id is
    /// a no-op: nothing is inserted and nothing fails.
    pub fn set_quantity(&mut self, id: &ProductId, delta: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == id) {
            line.quantity = line.quantity.saturating_add(delta).max(1);
        }
    }

    /// Remove a line from the cart.
    ///
    /// Returns whether anything was removed; an absent id is a no-op.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product.id != id);
        self.lines.len() < len_before
    }

    /// Clear all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Check whether a product is in the cart.
    pub fn is_in_cart(&self, id: &ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Get a line by product id.
    pub fn get_line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == id)
    }

    /// Current cart lines, in first-toggle-in order.
    pub fn line_items(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total amount, recomputed from current lines on every call.
    ///
    /// Zero (in the cart's currency) for an empty cart.
    pub fn total_amount(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency()), |acc, l| acc + l.line_total())
    }

    /// Derive the full totals breakdown. See [`CartTotals`].
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            lines: self.lines.iter().map(LineTotal::for_line).collect(),
            item_count: self.item_count(),
            unique_items: self.unique_item_count(),
            grand_total: self.total_amount(),
        }
    }

    /// The cart currency, taken from its first line. Catalog validation
    /// guarantees all products share one currency.
    fn currency(&self) -> Currency {
        self.lines
            .first()
            .map(|l| l.product.price.currency)
            .unwrap_or_default()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|l| &l.product.id == id)
    }
}

/// A product paired with a quantity in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product. Owned copy; the catalog is never mutated through it.
    pub product: Product,
    /// Quantity, always >= 1. A would-be zero line is removed instead.
    pub quantity: i64,
}

impl CartLine {
    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn carrot() -> Product {
        Product::new("v1", "Carrot", Money::new(7500, Currency::INR), "vegetables")
    }

    fn mango() -> Product {
        Product::new("f1", "Mango", Money::new(10000, Currency::INR), "fruits")
    }

    #[test]
    fn test_toggle_inserts_with_quantity_one() {
        let mut cart = Cart::new();
        cart.toggle_item(&carrot());

        assert!(cart.is_in_cart(&ProductId::new("v1")));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get_line(&ProductId::new("v1")).unwrap().quantity, 1);
    }

    #[test]
    fn test_toggle_twice_restores_empty_cart() {
        let mut cart = Cart::new();
        cart.toggle_item(&carrot());
        cart.toggle_item(&carrot());

        assert_eq!(cart, Cart::new());
    }

    #[test]
    fn test_toggle_removes_regardless_of_quantity() {
        let mut cart = Cart::new();
        cart.toggle_item(&carrot());
        cart.set_quantity(&ProductId::new("v1"), 4);

        cart.toggle_item(&carrot());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_clamps_at_one() {
        let mut cart = Cart::new();
        cart.toggle_item(&carrot());
        cart.set_quantity(&ProductId::new("v1"), 4);
        assert_eq!(cart.get_line(&ProductId::new("v1")).unwrap().quantity, 5);

        cart.set_quantity(&ProductId::new("v1"), -1000);
        let line = cart.get_line(&ProductId::new("v1")).unwrap();
        assert_eq!(line.quantity, 1);
        assert!(cart.is_in_cart(&ProductId::new("v1")));
    }

    #[test]
    fn test_set_quantity_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.set_quantity(&ProductId::new("nonexistent"), 5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.toggle_item(&carrot());

        assert!(cart.remove_item(&ProductId::new("v1")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.remove_item(&ProductId::new("nonexistent")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_amount_recomputes() {
        let mut cart = Cart::new();
        cart.toggle_item(&carrot());
        cart.toggle_item(&mango());
        assert_eq!(cart.total_amount(), Money::new(17500, Currency::INR));

        cart.set_quantity(&ProductId::new("v1"), 2);
        assert_eq!(cart.total_amount(), Money::new(32500, Currency::INR));

        cart.remove_item(&ProductId::new("f1"));
        assert_eq!(cart.total_amount(), Money::new(22500, Currency::INR));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.total_amount().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_line_items_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.toggle_item(&mango());
        cart.toggle_item(&carrot());

        let ids: Vec<&str> = cart
            .line_items()
            .iter()
            .map(|l| l.product.id.as_str())
            .collect();
        assert_eq!(ids, ["f1", "v1"]);
    }

    #[test]
    fn test_reinserted_item_moves_to_back() {
        let mut cart = Cart::new();
        cart.toggle_item(&carrot());
        cart.toggle_item(&mango());
        cart.toggle_item(&carrot()); // out
        cart.toggle_item(&carrot()); // back in, now last

        let ids: Vec<&str> = cart
            .line_items()
            .iter()
            .map(|l| l.product.id.as_str())
            .collect();
        assert_eq!(ids, ["f1", "v1"]);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        cart.toggle_item(&carrot());
        cart.toggle_item(&mango());
        cart.set_quantity(&ProductId::new("v1"), 2);

        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.unique_item_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.toggle_item(&carrot());
        cart.toggle_item(&mango());
        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.total_amount().is_zero());
    }
}
