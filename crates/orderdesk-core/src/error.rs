//! # Error Types
//!
//! Domain-specific error types for orderdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  orderdesk-core errors (this file)                                     │
//! │  └── ValidationError  - Field text that is not a number, or a product  │
//! │                         too large for the order total                  │
//! │                                                                         │
//! │  Form errors (in app)                                                  │
//! │  └── FormError        - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: raw text → ValidationError → FormError → notification           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing itself (subtotal, discount, final cost) cannot fail. The only
//! failures in the domain are rejecting input before a `Product` exists and
//! refusing a product whose totals would not be exact.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the boundary, before a `Product` is constructed, so the order
/// is never touched by invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field text could not be parsed as the expected number.
    ///
    /// ## When This Occurs
    /// - Quantity is not a whole number (`"abc"`, `"2.5"`, `""`)
    /// - Unit price is not a finite decimal (`"ten"`, `"NaN"`, `""`)
    #[error("{field} is not a valid number: '{value}'")]
    InvalidNumber { field: String, value: String },

    /// The product's line total, or the subtotal it would produce, is
    /// outside the exact decimal range.
    #[error("product '{name}' does not fit in the order total")]
    OutOfRange { name: String },
}

impl ValidationError {
    /// Creates an invalid-number error for `field`.
    pub fn invalid_number(field: &str, value: &str) -> Self {
        ValidationError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates an out-of-range error for the product `name`.
    pub fn out_of_range(name: &str) -> Self {
        ValidationError::OutOfRange {
            name: name.to_string(),
        }
    }

    /// Name of the field that was rejected.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidNumber { field, .. } => field,
            ValidationError::OutOfRange { .. } => "subtotal",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::invalid_number("quantity", "abc");
        assert_eq!(err.to_string(), "quantity is not a valid number: 'abc'");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::invalid_number("unit price", "");
        assert_eq!(err.field(), "unit price");
    }

    #[test]
    fn test_out_of_range() {
        let err = ValidationError::out_of_range("Huge");
        assert_eq!(err.to_string(), "product 'Huge' does not fit in the order total");
        assert_eq!(err.field(), "subtotal");
    }
}
