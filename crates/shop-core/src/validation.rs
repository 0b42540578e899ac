//! # Validation Module
//!
//! Input validation for catalog records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Loader (external)                                            │
//! │  └── Record shape: all four fields present (serde)                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog load (Store::from_records)                           │
//! │  └── THIS MODULE: non-empty name, integer-convertible price            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ShoppingCart                                                 │
//! │  └── Negative price, duplicate item                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Search and selection fragments are never validated: any string is a
//! legal query, and one that matches nothing is reported as such.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Catalog Record Validators
// =============================================================================

/// Validates an item name from a catalog record.
///
/// ## Rules
/// - Must not be empty. Whitespace counts as content.
///
/// ## Example
/// ```rust
/// use shop_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Apple").is_ok());
/// assert!(validate_item_name(" ").is_ok());
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Parses a price written as text into [`Money`].
///
/// Surrounding whitespace is ignored. Negative values parse fine; rejecting
/// them is the cart's job.
///
/// ## Example
/// ```rust
/// use shop_core::validation::parse_price_text;
///
/// assert_eq!(parse_price_text("20").unwrap().amount(), 20);
/// assert!(parse_price_text("20.5").is_err());
/// ```
pub fn parse_price_text(text: &str) -> ValidationResult<Money> {
    text.trim()
        .parse::<i64>()
        .map(Money::new)
        .map_err(|_| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("'{}' is not an integer", text),
        })
}

/// Converts a price written as a floating-point number into [`Money`].
///
/// ## Rules
/// - Must be finite and have no fractional part (`10.0` is fine, `10.5`
///   is not)
/// - Must fit in i64
pub fn parse_price_float(value: f64) -> ValidationResult<Money> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;

    if !value.is_finite() || value.fract() != 0.0 || !in_range {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("{} is not a whole number", value),
        });
    }

    Ok(Money::new(value as i64))
}

// =============================================================================
// Unit Tests
// =============================================================================
