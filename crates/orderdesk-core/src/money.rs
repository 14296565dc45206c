//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Prices are typed by the user as free decimal text ("45", "19.995"),   │
//! │  and the discount tier is chosen by comparing the subtotal against     │
//! │  exact thresholds. A float subtotal of 999.9999999 vs 1000 flips a     │
//! │  whole tier.                                                            │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    4999.99 × 5% = 249.9995 exactly, every time                         │
//! │    Rounding happens once, at display time                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orderdesk_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99
//!
//! let doubled = price * 2;                       // 21.98
//! let total = price + Money::from_cents(500);    // 15.99
//! assert_eq!(total.to_string(), "15.99");
//! assert_eq!(doubled, Money::from_cents(2198));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::DiscountRate;
use crate::DISPLAY_DECIMALS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal amount.
///
/// ## Design Decisions
/// - **Decimal, not f64**: every sum and percentage is exact
/// - **Signed**: negative prices are accepted by the form, so money is too
/// - **Saturating arithmetic**: absurd inputs clamp instead of panicking,
///   which keeps pricing infallible
///
/// ## Where Money is Used
/// ```text
/// Product.unit_price ──► Product.line_total ──► Order.subtotal
///                                                   │
///                          DiscountRate ──► Order.discount
///                                                   │
///                                           Order.final_cost
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (hundredths of the currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub fn from_major(major: i64) -> Self {
        Money(Decimal::from(major))
    }

    /// Returns the exact underlying amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(5000); // 50.00
    /// let line_total = unit_price.multiply_quantity(10);
    /// assert_eq!(line_total, Money::from_major(500));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(Decimal::from(qty)))
    }

    /// Multiplies money by a quantity, or `None` when the product leaves the
    /// `Decimal` range.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Money> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two amounts, or `None` when the sum leaves the `Decimal` range.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Returns the portion of this amount given by `rate`, without rounding.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::money::Money;
    /// use orderdesk_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(499_999); // 4999.99
    /// let discount = subtotal.apply_rate(DiscountRate::from_bps(500));
    /// assert_eq!(discount.amount().to_string(), "249.9995");
    /// ```
    pub fn apply_rate(&self, rate: DiscountRate) -> Money {
        // 1 bps = 10^-4, so the rate is exact as a scale-4 decimal
        let fraction = Decimal::new(i64::from(rate.bps()), 4);
        Money(self.0.saturating_mul(fraction))
    }

    /// Rounds half away from zero to `decimals` places.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let raw = Money::new(Decimal::new(2_499_995, 4)); // 249.9995
    /// assert_eq!(raw.round_to(2), Money::from_cents(25_000));
    /// ```
    pub fn round_to(&self, decimals: u32) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders money rounded to two decimals, with no currency symbol.
///
/// `600` → `600.00`, `249.9995` → `250.00`, `-5.5` → `-5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.round_to(DISPLAY_DECIMALS).0;
        value.rescale(DISPLAY_DECIMALS);
        if value.is_zero() {
            // -0.001 rounds to a signed zero
            value.set_sign_positive(true);
        }
        write!(f, "{}", value)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, money| acc + money)
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
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), dec!(10.99));
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(Money::from_major(600), Money::new(dec!(600.0000)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_major(600).to_string(), "600.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::new(dec!(249.9995)).to_string(), "250.00");
        assert_eq!(Money::new(dec!(0.125)).to_string(), "0.13");
    }

    #[test]
    fn test_display_never_shows_negative_zero() {
        assert_eq!(Money::new(dec!(-0.001)).to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(a * 3, Money::from_cents(3000));

        let mut c = a;
        c += b;
        c -= Money::from_cents(100);
        assert_eq!(c, Money::from_cents(1400));
    }

    #[test]
    fn test_apply_rate_is_exact() {
        let subtotal = Money::new(dec!(4999.99));
        let discount = subtotal.apply_rate(DiscountRate::from_bps(500));
        assert_eq!(discount.amount(), dec!(249.9995));
    }

    #[test]
    fn test_decimal_sum_has_no_float_drift() {
        let total: Money = [dec!(0.1), dec!(0.2)].into_iter().map(Money::new).sum();
        assert_eq!(total.amount(), dec!(0.3));
    }

    #[test]
    fn test_zero() {
        assert!(Money::zero().is_zero());
        assert!(Money::new(dec!(0.000)).is_zero());
        assert!(!Money::from_cents(-100).is_zero());
    }

    #[test]
    fn test_extreme_values_saturate() {
        let huge = Money::new(Decimal::MAX);
        assert_eq!(huge.multiply_quantity(2).amount(), Decimal::MAX);
        assert_eq!((huge + huge).amount(), Decimal::MAX);
    }

    #[test]
    fn test_checked_ops_report_overflow() {
        let huge = Money::new(dec!(70000000000000000000000000000));

        assert_eq!(huge.checked_multiply_quantity(1), Some(huge));
        assert_eq!(huge.checked_multiply_quantity(2), None);
        assert_eq!(huge.checked_add(huge), None);
        assert_eq!(huge.checked_add(Money::new(-huge.amount())), Some(Money::zero()));
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Money::from_cents(1099)).unwrap();
        assert_eq!(json, "\"10.99\"");
    }
}
