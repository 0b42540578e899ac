//! # Money Module
//!
//! Provides the `Money` type for item prices and cart subtotals.
//!
//! Prices in the catalog are whole numbers with no unit attached. `Money`
//! keeps them that way: there is no float constructor, and summing a cart
//! is exact.
//!
//! ## Why i128 Inside?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A single price fits in i64. A subtotal of several i64 prices does not │
//! │  always:                                                                │
//! │                                                                         │
//! │    i64::MAX + 1  → panic in debug, wraps negative in release  ❌        │
//! │                                                                         │
//! │  OUR SOLUTION: prices enter as i64, arithmetic runs in i128            │
//! │    Overflowing i128 would take more than 2^64 maximal prices in one    │
//! │    cart, which cannot fit in memory.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! let apple = Money::new(10);
//! let banana = Money::new(20);
//!
//! let subtotal: Money = [apple, banana].into_iter().sum();
//! assert_eq!(subtotal.amount(), 30);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

// =============================================================================
// Money Type
// =============================================================================

/// A whole-number price or sum of prices.
///
/// ## Design Decisions
/// - **Signed**: A catalog can carry a negative price; the cart is where
///   that gets rejected, so the type must be able to hold it
/// - **i64 in, i128 stored**: see the module docs
/// - **`#[serde(transparent)]`**: Serializes as a plain integer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i128);

impl Money {
    /// Creates a Money value from a catalog price.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let price = Money::new(1099);
    /// assert_eq!(price.amount(), 1099);
    /// ```
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Money(amount as i128)
    }

    /// Returns the value as a plain integer.
    #[inline]
    pub const fn amount(&self) -> i128 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    ///
    /// ## User Workflow
    /// ```text
    /// ShoppingCart::add_item(item)
    ///      │
    ///      ▼
    /// item.price().is_negative() ← THIS FUNCTION
    ///      │
    ///      ├── true  → Err(NegativePrice)
    ///      │
    ///      └── false → continue to the duplicate check
    /// ```
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the bare integer; prices carry no currency unit.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Summing an empty iterator gives zero, which is the subtotal of an
/// empty cart.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
