//! # orderdesk-core: Pure Business Logic for OrderDesk
//!
//! This crate is the **heart** of OrderDesk. It holds the pricing model for a
//! single customer order as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        OrderDesk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Order Form (apps/orderdesk-form)                │   │
//! │  │    field input ──► add product ──► display order details        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ parsed values in, report text out     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ orderdesk-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   order   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Order   │  │  parsing  │  │   │
//! │  │   │ Discount  │  │           │  │  report   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO ENVIRONMENT • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, DiscountRate, DiscountTier)
//! - [`money`] - Money type with exact decimal arithmetic
//! - [`order`] - The Order aggregate and its pricing rules
//! - [`report`] - Order summary snapshot and its text rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Parsing raw field text into products
//!
//! ## Example Usage
//!
//! ```rust
//! use orderdesk_core::{Money, Order, Product};
//!
//! let mut order = Order::new("A-100", "Ada");
//! order.add_product(Product::new("Bulk", 100, Money::from_cents(4500)));
//!
//! assert_eq!(order.subtotal(), Money::from_cents(450_000));
//! assert_eq!(order.discount(), Money::from_cents(22_500));
//! assert_eq!(order.final_cost(), Money::from_cents(427_500));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use order::Order;
pub use report::{OrderSummary, ProductLine};
pub use types::*;
pub use validation::ProductInput;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Subtotal (in whole currency units) at which the standard discount starts.
///
/// Inclusive: a subtotal of exactly 1000 already earns the standard rate.
pub const STANDARD_DISCOUNT_THRESHOLD: i64 = 1000;

/// Subtotal (in whole currency units) at which the bulk discount starts.
///
/// Inclusive: a subtotal of exactly 5000 already earns the bulk rate.
pub const BULK_DISCOUNT_THRESHOLD: i64 = 5000;

/// Standard discount rate in basis points (5%).
pub const STANDARD_DISCOUNT_BPS: u32 = 500;

/// Bulk discount rate in basis points (10%).
pub const BULK_DISCOUNT_BPS: u32 = 1000;

/// Decimal places used when rendering money in reports.
pub const DISPLAY_DECIMALS: u32 = 2;
