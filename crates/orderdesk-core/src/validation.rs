//! # Validation Module
//!
//! Turns raw field text into a [`Product`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Add Product Flow                                   │
//! │                                                                         │
//! │  Form fields (raw text)                                                │
//! │  ├── product name  ── taken as typed                                   │
//! │  ├── quantity      ── parse_quantity()   ── i64                        │
//! │  └── unit price    ── parse_unit_price() ── Money                      │
//! │           │                                                             │
//! │           ├── any parse failure → ValidationError, no Product built    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Product::new(...) ──► Order::add_product                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only numeric parseability is checked. Empty names, zero and negative
//! quantities, and zero and negative prices all pass.
//!
//! ## Usage
//! ```rust
//! use orderdesk_core::validation::{parse_quantity, ProductInput};
//!
//! assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
//! assert!(parse_quantity("abc").is_err());
//!
//! let product = ProductInput::new("Widget", "10", "50.0").parse().unwrap();
//! assert_eq!(product.quantity(), 10);
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::Product;

/// Field name reported for quantity failures.
pub const QUANTITY_FIELD: &str = "quantity";

/// Field name reported for unit price failures.
pub const UNIT_PRICE_FIELD: &str = "unit price";

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a quantity: a whole number with an optional sign.
///
/// Surrounding whitespace is ignored. Decimals, empty text and values outside
/// the `i64` range are rejected.
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_number(QUANTITY_FIELD, text))
}

/// Parses a unit price into exact [`Money`].
///
/// ## Accepted Forms
/// - Plain: `45`, `45.50`, `-3`, `+2.5`, `.5`, `5.`
/// - Scientific: `1e3`, `2.5E-1`
///
/// ## Example
/// ```rust
/// use orderdesk_core::validation::parse_unit_price;
/// use orderdesk_core::Money;
///
/// assert_eq!(parse_unit_price("19.99").unwrap(), Money::from_cents(1999));
/// assert_eq!(parse_unit_price("1e3").unwrap(), Money::from_major(1000));
/// assert!(parse_unit_price("NaN").is_err());
/// ```
pub fn parse_unit_price(text: &str) -> ValidationResult<Money> {
    let invalid = || ValidationError::invalid_number(UNIT_PRICE_FIELD, text);

    let literal = DecimalLiteral::scan(text.trim()).ok_or_else(invalid)?;
    literal.to_decimal().map(Money::new).ok_or_else(invalid)
}

/// A syntactically valid decimal literal, split into its parts.
struct DecimalLiteral<'a> {
    negative: bool,
    int_digits: &'a str,
    frac_digits: &'a str,
    exponent: Option<&'a str>,
}

impl<'a> DecimalLiteral<'a> {
    /// Splits `sign? digits? ('.' digits?)? (('e'|'E') sign? digits)?`.
    ///
    /// At least one mantissa digit is required.
    fn scan(text: &'a str) -> Option<Self> {
        let (negative, rest) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (mantissa, exponent) = match rest.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
            None => (rest, None),
        };

        let (int_digits, frac_digits) = match mantissa.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (mantissa, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }
        if !all_digits(int_digits) || !all_digits(frac_digits) {
            return None;
        }
        if let Some(exp) = exponent {
            let digits = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
        }

        Some(DecimalLiteral {
            negative,
            int_digits,
            frac_digits,
            exponent,
        })
    }

    /// Converts to a `Decimal`, or `None` when out of range.
    fn to_decimal(&self) -> Option<Decimal> {
        let int = if self.int_digits.is_empty() { "0" } else { self.int_digits };
        let plain = if self.frac_digits.is_empty() {
            int.to_string()
        } else {
            format!("{}.{}", int, self.frac_digits)
        };

        let mut magnitude = Decimal::from_str(&plain).ok()?;
        if let Some(exp) = self.exponent {
            let exp = match exp.parse::<i64>() {
                Ok(exp) => exp,
                // so small that it rounds to zero
                Err(_) if exp.starts_with('-') => i64::MIN,
                Err(_) => return None,
            };
            magnitude = shift_decimal_point(magnitude, exp)?;
        }

        Some(if self.negative { -magnitude } else { magnitude })
    }
}

/// Most fractional digits a `Decimal` can hold.
const MAX_SCALE: u32 = 28;

/// Multiplies `value` by `10^exp`, or `None` when the result leaves the
/// `Decimal` range. Results with more than 28 fractional digits are rounded
/// half away from zero to 28.
fn shift_decimal_point(value: Decimal, exp: i64) -> Option<Decimal> {
    if value.is_zero() {
        return Some(value);
    }

    if exp < 0 {
        let scale = u64::from(value.scale()).saturating_add(exp.unsigned_abs());
        return match u32::try_from(scale) {
            Ok(scale) if scale <= MAX_SCALE => {
                let mut shifted = value;
                shifted.set_scale(scale).ok()?;
                Some(shifted)
            }
            _ => {
                let excess = scale - u64::from(MAX_SCALE);
                let mantissa = round_off_digits(value.mantissa(), excess);
                Decimal::try_from_i128_with_scale(mantissa, MAX_SCALE).ok()
            }
        };
    }

    // A nonzero Decimal spans at most 10^-28..10^29
    if exp > 57 {
        return None;
    }
    (0..exp).try_fold(value, |acc, _| acc.checked_mul(Decimal::TEN))
}

/// Drops the last `digits` decimal digits of `mantissa`, rounding half away
/// from zero.
fn round_off_digits(mantissa: i128, digits: u64) -> i128 {
    // |mantissa| < 2^96 < 10^30 / 2, so dropping 30 or more digits leaves 0
    let digits = match u32::try_from(digits) {
        Ok(digits) if digits < 30 => digits,
        _ => return 0,
    };
    let divisor = 10i128.pow(digits);
    let quotient = mantissa / divisor;
    let remainder = (mantissa % divisor).abs();
    if remainder >= divisor - remainder {
        quotient + mantissa.signum()
    } else {
        quotient
    }
}

// =============================================================================
// Product Input
// =============================================================================

/// Raw text of the three product fields, as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
}

impl ProductInput {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit_price: impl Into<String>,
    ) -> Self {
        ProductInput {
            name: name.into(),
            quantity: quantity.into(),
            unit_price: unit_price.into(),
        }
    }

    /// Parses the numeric fields and builds a product.
    ///
    /// Quantity is checked before unit price; the first failure is returned.
    pub fn parse(&self) -> ValidationResult<Product> {
        let quantity = parse_quantity(&self.quantity)?;
        let unit_price = parse_unit_price(&self.unit_price)?;
        Ok(Product::new(self.name.clone(), quantity, unit_price))
    }

    /// Clears all three fields.
    pub fn clear(&mut self) {
        self.name.clear();
        self.quantity.clear();
        self.unit_price.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
