//! End-to-end store scenarios and property tests.
//!
//! Catalogs are built from JSON records, the way a loader would hand them
//! over.

use proptest::prelude::*;
use serde_json::json;
use shop_core::{CatalogRecord, Item, Money, ShopError, ShoppingCart, Store};

fn store_from_json(value: serde_json::Value) -> Store {
    let records: Vec<CatalogRecord> = serde_json::from_value(value).unwrap();
    Store::from_records(records).unwrap()
}

fn fruit_store() -> Store {
    store_from_json(json!([
        {"name": "Apple", "price": 10, "hashtags": ["fruit"], "description": "d"},
        {"name": "Banana", "price": 20, "hashtags": ["fruit", "sweet"], "description": "d"}
    ]))
}

#[test]
fn test_fruit_checkout_walkthrough() {
    let mut store = fruit_store();

    let found: Vec<&str> = store
        .search_by_name("an")
        .iter()
        .map(|item| item.name())
        .collect();
    assert_eq!(found, vec!["Banana"]);

    store.add_item("Apple").unwrap();
    assert_eq!(store.checkout(), Money::new(10));

    store.add_item("Banana").unwrap();
    assert_eq!(store.checkout(), Money::new(30));

    store.remove_item("Apple").unwrap();
    assert_eq!(store.checkout(), Money::new(20));
}

#[test]
fn test_fragment_resolution() {
    let mut store = fruit_store();

    assert!(matches!(
        store.add_item("xyz"),
        Err(ShopError::ItemNotExist(_))
    ));

    store.add_item("an").unwrap();
    assert_eq!(store.cart().item_names(), vec!["Banana"]);
}

#[test]
fn test_ambiguous_fragment() {
    let mut store = store_from_json(json!([
        {"name": "Pasta", "price": 3, "hashtags": [], "description": "d"},
        {"name": "Salsa", "price": 4, "hashtags": [], "description": "d"}
    ]));

    assert!(matches!(
        store.add_item("a"),
        Err(ShopError::TooManyMatches { .. })
    ));
    assert!(store.cart().is_empty());
}

#[test]
fn test_string_prices_load() {
    let store = store_from_json(json!([
        {"name": "Milk", "price": "7", "hashtags": ["dairy"], "description": "1L"}
    ]));
    assert_eq!(store.get_items()[0].price(), Money::new(7));
}

#[test]
fn test_loose_records_load_as_written() {
    let store = store_from_json(json!([
        {"name": "Tea", "price": 4.0, "hashtags": [""], "description": "d"},
        {"name": " ", "price": 0, "hashtags": [], "description": ""}
    ]));

    let tea = &store.get_items()[0];
    assert_eq!(tea.price(), Money::new(4));
    assert_eq!(tea.hashtags(), [String::new()]);
    assert_eq!(store.get_items()[1].name(), " ");
}

#[test]
fn test_huge_prices_add_up_exactly() {
    let mut store = store_from_json(json!([
        {"name": "Gold", "price": i64::MAX, "hashtags": [], "description": "d"},
        {"name": "Silver", "price": 1, "hashtags": [], "description": "d"}
    ]));

    store.add_item("gold").unwrap();
    store.add_item("silver").unwrap();

    assert_eq!(store.checkout().amount(), i64::MAX as i128 + 1);
    assert_eq!(store.checkout().to_string(), "9223372036854775808");
}

#[test]
fn test_malformed_record_reports_its_index() {
    let records: Vec<CatalogRecord> = serde_json::from_value(json!([
        {"name": "Milk", "price": 7, "hashtags": [], "description": "d"},
        {"name": "Eggs", "price": "a dozen", "hashtags": [], "description": "d"}
    ]))
    .unwrap();

    match Store::from_records(records) {
        Err(ShopError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn test_recommendations_follow_the_cart() {
    let mut store = store_from_json(json!([
        {"name": "Chips", "price": 3, "hashtags": ["snack", "salty"], "description": "d"},
        {"name": "Pretzels", "price": 4, "hashtags": ["snack", "salty"], "description": "d"},
        {"name": "Cookies", "price": 5, "hashtags": ["snack", "sweet"], "description": "d"},
        {"name": "Candy", "price": 2, "hashtags": ["sweet"], "description": "d"}
    ]));

    // Nothing in the cart: plain name order.
    let before: Vec<&str> = store
        .search_by_hashtag("snack")
        .iter()
        .map(|item| item.name())
        .collect();
    assert_eq!(before, vec!["Chips", "Cookies", "Pretzels"]);

    store.add_item("chips").unwrap();

    // Pretzels shares both tags with Chips, Cookies only one.
    let after: Vec<&str> = store
        .search_by_hashtag("snack")
        .iter()
        .map(|item| item.name())
        .collect();
    assert_eq!(after, vec!["Pretzels", "Cookies"]);
}

// =============================================================================
// Properties
// =============================================================================

fn arb_item() -> impl Strategy<Value = Item> {
    (
        "[A-Za-z]{1,8}",
        0i64..10_000,
        prop::collection::vec("[a-c]{1,2}", 0..4),
    )
        .prop_map(|(name, price, tags)| Item::new(name, Money::new(price), tags, "d"))
}

proptest! {
    #[test]
    fn prop_add_increases_subtotal_by_price(items in prop::collection::vec(arb_item(), 0..12)) {
        let mut cart = ShoppingCart::new();
        for item in items {
            let before = cart.get_subtotal();
            let price = item.price();
            let already = cart.contains(&item);

            let result = cart.add_item(item);
            if already {
                prop_assert!(matches!(result, Err(ShopError::ItemAlreadyExists(_))));
                prop_assert_eq!(cart.get_subtotal(), before);
            } else {
                prop_assert!(result.is_ok());
                prop_assert_eq!(cart.get_subtotal(), before + price);
            }
        }
    }

    #[test]
    fn prop_negative_price_never_enters_cart(
        base in prop::collection::vec(arb_item(), 0..6),
        price in i64::MIN / 2..0,
    ) {
        let mut cart = ShoppingCart::new();
        for item in base {
            let _ = cart.add_item(item);
        }
        let names_before: Vec<String> = cart.item_names().iter().map(|n| n.to_string()).collect();

        let result = cart.add_item(Item::new("Bad", Money::new(price), vec![], "d"));

        prop_assert!(matches!(result, Err(ShopError::NegativePrice { .. })), "negative price was accepted");
        let names_after: Vec<String> = cart.item_names().iter().map(|n| n.to_string()).collect();
        prop_assert_eq!(names_before, names_after);
    }

    #[test]
    fn prop_removing_absent_name_changes_nothing(
        items in prop::collection::vec(arb_item(), 0..6),
    ) {
        let mut cart = ShoppingCart::new();
        for item in items {
            let _ = cart.add_item(item);
        }
        let before = cart.len();

        // Generated names are ASCII letters only.
        let result = cart.remove_item("no such item!");

        prop_assert!(matches!(result, Err(ShopError::ItemNotExist(_))), "absent name was removed");
        prop_assert_eq!(cart.len(), before);
    }

    #[test]
    fn prop_search_never_returns_cart_items_and_is_sorted(
        catalog in prop::collection::vec(arb_item(), 1..10),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..4),
        tag in "[a-c]{1,2}",
    ) {
        let mut store = Store::new(catalog.clone());
        for pick in picks {
            // Fragments can be ambiguous here; failures just leave the cart alone.
            let _ = store.add_item(pick.get(&catalog[..]).name());
        }

        for results in [store.search_by_name(""), store.search_by_hashtag(&tag)] {
            for item in &results {
                prop_assert!(!store.cart().contains(item));
            }

            for pair in results.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let (score_a, score_b) = (
                    store.number_of_matching_tags(a),
                    store.number_of_matching_tags(b),
                );
                prop_assert!(score_a > score_b || (score_a == score_b && a.name() <= b.name()));
            }
        }
    }
}
