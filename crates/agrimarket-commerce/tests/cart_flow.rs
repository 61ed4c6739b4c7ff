//! End-to-end marketplace flow: filter the catalog, drive the cart.

use agrimarket_commerce::prelude::*;

fn two_product_catalog() -> Catalog {
    let products = vec![
        Product::new("v1", "Carrot", Money::new(7500, Currency::INR), "vegetables"),
        Product::new("f1", "Mango", Money::new(10000, Currency::INR), "fruits"),
    ];
    Catalog::new(products, Category::defaults()).unwrap()
}

#[test]
fn browse_and_toggle_flow() {
    let catalog = two_product_catalog();

    let vegetables = catalog.filter(&CategoryId::new("vegetables"));
    assert_eq!(vegetables.len(), 1);
    assert_eq!(vegetables[0].id.as_str(), "v1");

    let carrot = &vegetables[0];
    let mut cart = Cart::new();

    cart.toggle_item(carrot);
    assert_eq!(cart.unique_item_count(), 1);
    assert_eq!(cart.line_items()[0].quantity, 1);
    assert_eq!(cart.total_amount(), Money::new(7500, Currency::INR));

    cart.toggle_item(carrot);
    assert!(cart.is_empty());
    assert!(cart.total_amount().is_zero());
}

#[test]
fn multi_line_totals() {
    let catalog = two_product_catalog();
    let carrot = catalog.get(&ProductId::new("v1")).unwrap();
    let mango = catalog.get(&ProductId::new("f1")).unwrap();

    let mut cart = Cart::new();
    cart.toggle_item(carrot);
    cart.toggle_item(mango);
    cart.set_quantity(&ProductId::new("v1"), 1);

    let totals = cart.totals();
    assert_eq!(totals.lines.len(), 2);
    assert_eq!(totals.lines[0].product_id.as_str(), "v1");
    assert_eq!(totals.lines[0].quantity, 2);
    assert_eq!(totals.lines[1].product_id.as_str(), "f1");
    assert_eq!(totals.lines[1].quantity, 1);
    // 75 * 2 + 100
    assert_eq!(totals.grand_total, Money::new(25000, Currency::INR));
    assert_eq!(totals.item_count, 3);
}

#[test]
fn totals_match_unit_prices_times_quantities() {
    let products = vec![
        Product::new("a", "A", Money::new(1000, Currency::INR), "supplies"),
        Product::new("b", "B", Money::new(2000, Currency::INR), "supplies"),
    ];
    let catalog = Catalog::new(products, Category::defaults()).unwrap();

    let mut cart = Cart::new();
    cart.toggle_item(catalog.get(&ProductId::new("a")).unwrap());
    cart.toggle_item(catalog.get(&ProductId::new("b")).unwrap());
    cart.set_quantity(&ProductId::new("a"), 2);

    // 10 * 3 + 20 * 1
    assert_eq!(cart.total_amount(), Money::new(5000, Currency::INR));
}

#[test]
fn seed_catalog_walkthrough() {
    let catalog = Catalog::agrimarket_seed();
    let seeds = catalog.filter(&CategoryId::new("seeds"));
    assert_eq!(seeds.len(), 5);

    let mut cart = Cart::new();
    for product in &seeds {
        cart.toggle_item(product);
    }
    assert_eq!(cart.unique_item_count(), 5);

    // Sunflower 150 + Pumpkin 180 + Chia 220 + Flax 200 + Sesame 130
    assert_eq!(cart.total_amount(), Money::new(88000, Currency::INR));

    cart.set_quantity(&seeds[0].id, -1000);
    assert_eq!(cart.get_line(&seeds[0].id).unwrap().quantity, 1);

    cart.remove_item(&seeds[1].id);
    assert_eq!(cart.unique_item_count(), 4);
    assert_eq!(cart.total_amount(), Money::new(70000, Currency::INR));
}

#[test]
fn absent_key_operations_are_safe() {
    let mut cart = Cart::new();
    cart.set_quantity(&ProductId::new("nonexistent"), 5);
    assert!(!cart.remove_item(&ProductId::new("nonexistent")));
    assert!(cart.is_empty());
    assert!(!cart.is_in_cart(&ProductId::new("nonexistent")));
}
