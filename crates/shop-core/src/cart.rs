//! # Shopping Cart
//!
//! An insertion-ordered set of distinct items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation              Checks (in order)          State Change         │
//! │  ─────────              ─────────────────          ────────────         │
//! │                                                                         │
//! │  add_item(item) ──────► price < 0?  NegativePrice                       │
//! │                         equal item? ItemAlreadyExists                   │
//! │                         ───────────────────────────► items.push(item)   │
//! │                                                                         │
//! │  remove_item(name) ───► exact name? ItemNotExist                        │
//! │                         ───────────────────────────► items.remove(i)    │
//! │                                                                         │
//! │  get_subtotal() ──────────────────────────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: every check runs before the mutation, so a failed call leaves    │
//! │        the cart untouched.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::{ShopError, ShopResult};
use crate::item::Item;
use crate::money::Money;

/// The shopping cart.
///
/// ## Invariants
/// - No two equal items (by value, all four fields)
/// - Every item has a non-negative price
/// - Items keep the order they were added in
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShoppingCart {
    items: Vec<Item>,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        ShoppingCart { items: Vec::new() }
    }

    /// Adds an item to the end of the cart.
    ///
    /// ## Returns
    /// - `Err(NegativePrice)` if the item's price is below zero
    /// - `Err(ItemAlreadyExists)` if an equal item is already in the cart
    pub fn add_item(&mut self, item: Item) -> ShopResult<()> {
        if item.price().is_negative() {
            return Err(ShopError::NegativePrice {
                name: item.name().to_string(),
                price: item.price(),
            });
        }

        if self.contains(&item) {
            return Err(ShopError::ItemAlreadyExists(item.name().to_string()));
        }

        debug!(name = %item.name(), price = %item.price(), "Adding item to cart");
        self.items.push(item);
        Ok(())
    }

    /// Removes the first item whose name is exactly `name`.
    pub fn remove_item(&mut self, name: &str) -> ShopResult<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.name() == name)
            .ok_or_else(|| ShopError::ItemNotExist(name.to_string()))?;

        debug!(name = %name, "Removing item from cart");
        Ok(self.items.remove(index))
    }

    /// Sum of all item prices. Zero for an empty cart.
    pub fn get_subtotal(&self) -> Money {
        self.items.iter().map(Item::price).sum()
    }

    /// Names of the items in the cart, in insertion order.
    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(Item::name).collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether an item equal to `item` is in the cart.
    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    /// Every hashtag of every cart item, concatenated in insertion order.
    ///
    /// This is a multiset: a tag carried by two cart items appears twice.
    pub fn hashtags(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .flat_map(|item| item.hashtags().iter().map(String::as_str))
    }

    /// Returns the number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
