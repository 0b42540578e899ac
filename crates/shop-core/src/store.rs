//! # Store
//!
//! The catalog plus one customer's cart.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Store Operations                                 │
//! │                                                                         │
//! │  search_by_name("an") ───► catalog names containing "an"                │
//! │  search_by_hashtag("x") ─► catalog items tagged exactly "x"             │
//! │                              │                                          │
//! │                              ├── drop items already in the cart         │
//! │                              └── rank: matching tags ↓, then name ↑     │
//! │                                                                         │
//! │  add_item("ban") ────────► resolve in CATALOG (case-insensitive)        │
//! │  remove_item("ban") ─────► resolve in CART    (case-insensitive)        │
//! │                              │                                          │
//! │                              ├── 0 matches  → ItemNotExist              │
//! │                              ├── 2+ matches → TooManyMatches            │
//! │                              └── 1 match    → ShoppingCart does the rest│
//! │                                                                         │
//! │  checkout() ─────────────► cart subtotal (cart is left as is)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tag Ranking
//! An item's score is, for each of its hashtags, the number of times that
//! tag occurs across all hashtags of all cart items, summed. Repeats count
//! on both sides: an item tagged `fruit` twice, against a cart holding two
//! `fruit` items, scores 4.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::cart::ShoppingCart;
use crate::error::{ShopError, ShopResult};
use crate::item::{CatalogRecord, Item};
use crate::money::Money;

/// Occurrence count of every hashtag in the cart.
type TagCounts<'a> = HashMap<&'a str, usize>;

/// A catalog of items and the cart being filled from it.
#[derive(Debug, Clone)]
pub struct Store {
    catalog: Vec<Item>,
    cart: ShoppingCart,
}

impl Store {
    /// Creates a store over ready-made items with an empty cart.
    ///
    /// Duplicate names are accepted. They make fragment resolution report
    /// `TooManyMatches` for any fragment that hits both, so they are logged.
    pub fn new(catalog: Vec<Item>) -> Self {
        let mut seen = HashSet::new();
        for item in &catalog {
            if !seen.insert(item.name()) {
                warn!(name = %item.name(), "Duplicate item name in catalog");
            }
        }

        info!(items = catalog.len(), "Catalog loaded");

        Store {
            catalog,
            cart: ShoppingCart::new(),
        }
    }

    /// Validates raw catalog records and builds a store from them.
    ///
    /// ## Errors
    /// `InvalidRecord` carrying the position of the first bad record.
    pub fn from_records<I>(records: I) -> ShopResult<Self>
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        let catalog = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .into_item()
                    .map_err(|source| ShopError::InvalidRecord { index, source })
            })
            .collect::<ShopResult<Vec<_>>>()?;

        Ok(Store::new(catalog))
    }

    /// The whole catalog in load order.
    pub fn get_items(&self) -> &[Item] {
        &self.catalog
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    /// Catalog items whose name contains `fragment` (case-sensitive), minus
    /// those already in the cart, best tag match first.
    pub fn search_by_name(&self, fragment: &str) -> Vec<&Item> {
        let results = self.ranked(|item| item.name().contains(fragment));
        debug!(fragment = %fragment, count = results.len(), "Searched by name");
        results
    }

    /// Catalog items carrying exactly `tag`, minus those already in the
    /// cart, best tag match first.
    pub fn search_by_hashtag(&self, tag: &str) -> Vec<&Item> {
        let results = self.ranked(|item| item.has_hashtag(tag));
        debug!(tag = %tag, count = results.len(), "Searched by hashtag");
        results
    }

    /// Tag-match score of `item` against the current cart.
    pub fn number_of_matching_tags(&self, item: &Item) -> usize {
        matching_tags(item, &self.cart_tag_counts())
    }

    /// Adds the single catalog item whose name contains `fragment`,
    /// ignoring case.
    ///
    /// ## Errors
    /// - `ItemNotExist` / `TooManyMatches` from resolution
    /// - `ItemAlreadyExists` / `NegativePrice` from the cart
    pub fn add_item(&mut self, fragment: &str) -> ShopResult<()> {
        let item = resolve(&self.catalog, fragment)?.clone();
        self.cart.add_item(item)?;

        debug!(fragment = %fragment, subtotal = %self.cart.get_subtotal(), "Cart updated");
        Ok(())
    }

    /// Removes the single cart item whose name contains `fragment`,
    /// ignoring case.
    pub fn remove_item(&mut self, fragment: &str) -> ShopResult<()> {
        let name = resolve(self.cart.items(), fragment)?.name().to_string();
        self.cart.remove_item(&name)?;

        debug!(fragment = %fragment, subtotal = %self.cart.get_subtotal(), "Cart updated");
        Ok(())
    }

    /// Total price of the cart. The cart is not cleared.
    pub fn checkout(&self) -> Money {
        self.cart.get_subtotal()
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn cart_tag_counts(&self) -> TagCounts<'_> {
        let mut counts = TagCounts::new();
        for tag in self.cart.hashtags() {
            *counts.entry(tag).or_insert(0) += 1;
        }
        counts
    }

    /// Catalog items passing `filter` and not in the cart, sorted by
    /// descending score then ascending name. The sort is stable, so full
    /// ties keep catalog order.
    fn ranked<F>(&self, filter: F) -> Vec<&Item>
    where
        F: Fn(&Item) -> bool,
    {
        let counts = self.cart_tag_counts();

        let mut results: Vec<&Item> = self
            .catalog
            .iter()
            .filter(|&item| filter(item) && !self.cart.contains(item))
            .collect();

        results.sort_by_cached_key(|&item| (Reverse(matching_tags(item, &counts)), item.name()));
        results
    }
}

fn matching_tags(item: &Item, counts: &TagCounts<'_>) -> usize {
    item.hashtags()
        .iter()
        .map(|tag| counts.get(tag.as_str()).copied().unwrap_or(0))
        .sum()
}

/// Finds the one item among `candidates` whose name contains `fragment`,
/// ignoring case.
fn resolve<'a>(candidates: &'a [Item], fragment: &str) -> ShopResult<&'a Item> {
    let needle = fragment.to_lowercase();

    let matches: Vec<&Item> = candidates
        .iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect();

    match matches.as_slice() {
        [] => Err(ShopError::ItemNotExist(fragment.to_string())),
        [item] => Ok(*item),
        _ => Err(ShopError::TooManyMatches {
            query: fragment.to_string(),
            matches: matches.iter().map(|item| item.name().to_string()).collect(),
        }),
    }
}
