//! # Catalog Items
//!
//! The immutable `Item` and the raw `CatalogRecord` it is built from.
//!
//! ## From Record to Item
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog file ──► loader (any serde format) ──► CatalogRecord           │
//! │                                                      │                  │
//! │                                      CatalogRecord::into_item()         │
//! │                                      ├── name:  must not be empty       │
//! │                                      └── price: 10, 10.0 or "10"        │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                                    Item                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A negative price passes through loading untouched. The cart is where it
//! gets rejected, so a store can still list and search such an item.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{parse_price_float, parse_price_text, validate_item_name};

// =============================================================================
// Item
// =============================================================================

/// An item available for purchase.
///
/// ## Equality
/// Two items are equal when name, price, hashtags (including order and
/// repeats) and description are all equal. The cart relies on this for its
/// uniqueness check; `Hash` agrees with it.
///
/// ## Immutability
/// Fields are private and there are no setters. An `Item` reads the same from
/// catalog load until its store is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: Money,
    hashtags: Vec<String>,
    description: String,
}

impl Item {
    /// Creates an item. The price is not checked here.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        hashtags: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Item {
            name: name.into(),
            price,
            hashtags,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Hashtags in catalog order. Repeats are kept.
    pub fn hashtags(&self) -> &[String] {
        &self.hashtags
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether `tag` equals one of this item's hashtags exactly.
    pub fn has_hashtag(&self, tag: &str) -> bool {
        self.hashtags.iter().any(|t| t == tag)
    }
}

// =============================================================================
// Catalog Record
// =============================================================================

/// Price as it appears in a raw catalog record.
///
/// Catalog files in the wild write prices as `10`, `10.0` or `"10"`.
/// All three are accepted as long as they hold a whole number; anything
/// else fails deserialization or validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordPrice {
    Whole(i64),
    Float(f64),
    Text(String),
}

/// One raw entry of the catalog, as handed over by whatever loads it.
///
/// All four fields are required; a loader that deserializes a record with a
/// missing field fails before the store ever sees it.
///
/// ## Example
/// ```rust
/// use shop_core::CatalogRecord;
///
/// let record: CatalogRecord = serde_json::from_str(
///     r#"{"name": "Apple", "price": "10", "hashtags": ["fruit"], "description": "Red"}"#,
/// ).unwrap();
///
/// let item = record.into_item().unwrap();
/// assert_eq!(item.price().amount(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    pub price: RecordPrice,
    pub hashtags: Vec<String>,
    pub description: String,
}

impl CatalogRecord {
    /// Validates the record and converts it into an [`Item`].
    pub fn into_item(self) -> Result<Item, ValidationError> {
        validate_item_name(&self.name)?;

        let price = match self.price {
            RecordPrice::Whole(value) => Money::new(value),
            RecordPrice::Float(value) => parse_price_float(value)?,
            RecordPrice::Text(text) => parse_price_text(&text)?,
        };

        Ok(Item::new(self.name, price, self.hashtags, self.description))
    }
}

impl TryFrom<CatalogRecord> for Item {
    type Error = ValidationError;

    fn try_from(record: CatalogRecord) -> Result<Self, Self::Error> {
        record.into_item()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
