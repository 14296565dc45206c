//! # Domain Types
//!
//! Core domain types used throughout OrderDesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  DiscountTier   │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  None     (<1k) │   │  bps (u32)      │       │
//! │  │  quantity       │   │  Standard (≥1k) │   │  500 = 5%       │       │
//! │  │  unit_price     │   │  Bulk     (≥5k) │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Order` aggregate lives in [`crate::order`].

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{
    BULK_DISCOUNT_BPS, BULK_DISCOUNT_THRESHOLD, STANDARD_DISCOUNT_BPS,
    STANDARD_DISCOUNT_THRESHOLD,
};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5%, 1000 bps = 10%
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Discount Tier
// =============================================================================

/// The three discount tiers, selected by order subtotal.
///
/// | subtotal          | tier       | rate |
/// |-------------------|------------|------|
/// | < 1000            | `None`     | 0%   |
/// | ≥ 1000 and < 5000 | `Standard` | 5%   |
/// | ≥ 5000            | `Bulk`     | 10%  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    /// Below the standard threshold.
    #[default]
    None,
    /// From the standard threshold up to (not including) the bulk threshold.
    Standard,
    /// At or above the bulk threshold.
    Bulk,
}

impl DiscountTier {
    /// Selects the tier for a subtotal. Lower edges are inclusive.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::{DiscountTier, Money};
    ///
    /// assert_eq!(DiscountTier::for_subtotal(Money::from_cents(99_999)), DiscountTier::None);
    /// assert_eq!(DiscountTier::for_subtotal(Money::from_major(1000)), DiscountTier::Standard);
    /// assert_eq!(DiscountTier::for_subtotal(Money::from_major(5000)), DiscountTier::Bulk);
    /// ```
    pub fn for_subtotal(subtotal: Money) -> Self {
        if subtotal >= Money::from_major(BULK_DISCOUNT_THRESHOLD) {
            DiscountTier::Bulk
        } else if subtotal >= Money::from_major(STANDARD_DISCOUNT_THRESHOLD) {
            DiscountTier::Standard
        } else {
            DiscountTier::None
        }
    }

    /// Returns the rate this tier grants.
    pub const fn rate(&self) -> DiscountRate {
        match self {
            DiscountTier::None => DiscountRate::zero(),
            DiscountTier::Standard => DiscountRate::from_bps(STANDARD_DISCOUNT_BPS),
            DiscountTier::Bulk => DiscountRate::from_bps(BULK_DISCOUNT_BPS),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// One line item of an order: a name, a quantity, and a unit price.
///
/// Immutable once built. No validation happens here; the caller parses and
/// checks field text first (see [`crate::validation`]). Zero or negative
/// quantities and prices are accepted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    quantity: i64,
    unit_price: Money,
}

impl Product {
    /// Creates a product.
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        Product {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Display name as typed.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Line total (quantity × unit price). Recomputed on every call.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::{Money, Product};
    ///
    /// let widget = Product::new("Widget", 10, Money::from_major(50));
    /// assert_eq!(widget.line_total(), Money::from_major(500));
    /// ```
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Line total, or `None` when it does not fit in a `Decimal`.
    #[inline]
    pub fn checked_line_total(&self) -> Option<Money> {
        self.unit_price.checked_multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_discount_rate_from_bps() {
        let rate = DiscountRate::from_bps(500);
        assert_eq!(rate.bps(), 500);
        assert!(!rate.is_zero());
    }

    #[test]
    fn test_discount_rate_default() {
        assert!(DiscountRate::default().is_zero());
    }

    #[test]
    fn test_tier_boundaries() {
        let tier = |amount| DiscountTier::for_subtotal(Money::new(amount));

        assert_eq!(tier(dec!(0)), DiscountTier::None);
        assert_eq!(tier(dec!(999.99)), DiscountTier::None);
        assert_eq!(tier(dec!(1000)), DiscountTier::Standard);
        assert_eq!(tier(dec!(4999.99)), DiscountTier::Standard);
        assert_eq!(tier(dec!(5000)), DiscountTier::Bulk);
        assert_eq!(tier(dec!(10000)), DiscountTier::Bulk);
    }

    #[test]
    fn test_negative_subtotal_has_no_discount() {
        assert_eq!(DiscountTier::for_subtotal(Money::from_major(-2000)), DiscountTier::None);
    }

    #[test]
    fn test_tier_rates() {
        assert_eq!(DiscountTier::None.rate().bps(), 0);
        assert_eq!(DiscountTier::Standard.rate().bps(), 500);
        assert_eq!(DiscountTier::Bulk.rate().bps(), 1000);
    }

    #[test]
    fn test_product_accessors() {
        let product = Product::new("Gadget", 5, Money::from_major(20));
        assert_eq!(product.name(), "Gadget");
        assert_eq!(product.quantity(), 5);
        assert_eq!(product.unit_price(), Money::from_major(20));
        assert_eq!(product.line_total(), Money::from_major(100));
    }

    #[test]
    fn test_product_accepts_zero_and_negative_values() {
        let zero = Product::new("", 0, Money::from_major(20));
        assert!(zero.line_total().is_zero());

        let refund = Product::new("Return", -2, Money::from_cents(1050));
        assert_eq!(refund.line_total(), Money::from_cents(-2100));
    }

    #[test]
    fn test_checked_line_total() {
        let widget = Product::new("Widget", 3, Money::from_cents(250));
        assert_eq!(widget.checked_line_total(), Some(Money::from_cents(750)));

        let huge = Product::new("Huge", 2, Money::new(dec!(70000000000000000000000000000)));
        assert_eq!(huge.checked_line_total(), None);
    }
}
