//! # shop-core: Catalog, Cart and Store Logic for Corner Shop
//!
//! This crate holds everything a customer session needs: the item catalog,
//! the shopping cart, and the store that searches one and mutates the other.
//! There is no I/O in here; the catalog arrives as already-parsed records.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Corner Shop Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Catalog loader (external collaborator)             │   │
//! │  │         reads a file in some format ──► Vec<CatalogRecord>      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │   cart    │  │   store   │  │ validation│  │   │
//! │  │   │   Item    │  │ Shopping  │  │  search   │  │  records  │  │   │
//! │  │   │  Record   │  │   Cart    │  │  resolve  │  │  prices   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS OVER OWNED DATA     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The immutable `Item` and the raw `CatalogRecord`
//! - [`cart`] - `ShoppingCart`: distinct items, subtotal
//! - [`store`] - `Store`: catalog search, fragment resolution, checkout
//! - [`money`] - Integer price type
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog record validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{Item, Money, Store};
//!
//! let mut store = Store::new(vec![
//!     Item::new("Apple", Money::new(10), vec!["fruit".into()], "d"),
//!     Item::new("Banana", Money::new(20), vec!["fruit".into(), "sweet".into()], "d"),
//! ]);
//!
//! let found = store.search_by_name("an");
//! assert_eq!(found[0].name(), "Banana");
//!
//! store.add_item("apple").unwrap();
//! assert_eq!(store.checkout().amount(), 10);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod item;
pub mod money;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::ShoppingCart;
pub use error::{ShopError, ShopResult, ValidationError};
pub use item::{CatalogRecord, Item};
pub use money::Money;
pub use store::Store;
