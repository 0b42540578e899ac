//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ShopError        - A single requested operation was rejected          │
//! │  ├── NegativePrice       cart refused an item priced below zero        │
//! │  ├── ItemAlreadyExists   equal item already in the cart                │
//! │  ├── ItemNotExist        fragment/name matched nothing                 │
//! │  ├── TooManyMatches      fragment matched more than one item           │
//! │  └── InvalidRecord       catalog record failed validation at load      │
//! │                                                                         │
//! │  ValidationError  - Why a catalog record was rejected                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. Every operation validates before it mutates,
//! so an `Err` always leaves the cart exactly as it was.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Shop Error
// =============================================================================

/// Errors returned by cart and store operations.
#[derive(Debug, Error)]
pub enum ShopError {
    /// An item priced below zero was offered to the cart.
    ///
    /// ## When This Occurs
    /// - The catalog contained a negative price (loading does not reject it)
    /// - An item built by hand was passed straight to `ShoppingCart::add_item`
    #[error("Item {name} has a negative price: {price}")]
    NegativePrice { name: String, price: Money },

    /// An equal item (all four fields) is already in the cart.
    #[error("Item already in cart: {0}")]
    ItemAlreadyExists(String),

    /// Nothing matched the requested name or fragment.
    ///
    /// ## When This Occurs
    /// - `Store::add_item`: no catalog name contains the fragment
    /// - `Store::remove_item`: no cart item name contains the fragment
    /// - `ShoppingCart::remove_item`: no cart item has exactly that name
    #[error("No item matches '{0}'")]
    ItemNotExist(String),

    /// A fragment matched several items where exactly one was required.
    ///
    /// ## User Workflow
    /// ```text
    /// add_item("a")
    ///      │
    ///      ▼
    /// catalog names containing "a": ["Apple", "Banana"]
    ///      │
    ///      ▼
    /// TooManyMatches { query: "a", matches: ["Apple", "Banana"] }
    ///      │
    ///      ▼
    /// Caller asks for a longer fragment
    /// ```
    #[error("'{query}' matches {} items: {matches:?}", .matches.len())]
    TooManyMatches { query: String, matches: Vec<String> },

    /// A catalog record was malformed.
    #[error("Catalog record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog record validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g. a price that is not a whole number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

// =============================================================================
// Unit Tests
// =============================================================================
