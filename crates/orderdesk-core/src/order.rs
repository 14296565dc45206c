//! # Order
//!
//! The order aggregate: an identified, named list of products plus the
//! pricing rules derived from it.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products ──► Σ line_total ──► subtotal                                │
//! │                                   │                                     │
//! │                                   ├──► DiscountTier::for_subtotal       │
//! │                                   │          │                          │
//! │                                   │          ▼                          │
//! │                                   │     rate × subtotal ──► discount    │
//! │                                   │                            │        │
//! │                                   └────────── − ───────────────┘        │
//! │                                               │                         │
//! │                                               ▼                         │
//! │                                          final_cost                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is cached: every derived value is recomputed from the product
//! list on each call.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::report::OrderSummary;
use crate::types::{DiscountRate, DiscountTier, Product};

/// A customer's order.
///
/// ## Invariants
/// - Products keep insertion order; duplicates are allowed
/// - `discount()` is never negative and never exceeds 10% of `subtotal()`
/// - `final_cost() == subtotal() - discount()`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    order_id: String,
    customer_name: String,
    products: Vec<Product>,
}

impl Order {
    /// Creates an empty order.
    pub fn new(order_id: impl Into<String>, customer_name: impl Into<String>) -> Self {
        Order {
            order_id: order_id.into(),
            customer_name: customer_name.into(),
            products: Vec::new(),
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Replaces the order id and customer name, keeping the products.
    pub fn set_details(&mut self, order_id: impl Into<String>, customer_name: impl Into<String>) {
        self.order_id = order_id.into();
        self.customer_name = customer_name.into();
    }

    /// Appends a product. No capacity limit, no duplicate check.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of product lines.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of every product's line total.
    pub fn subtotal(&self) -> Money {
        self.products.iter().map(Product::line_total).sum()
    }

    /// Tier selected by the current subtotal.
    pub fn discount_tier(&self) -> DiscountTier {
        DiscountTier::for_subtotal(self.subtotal())
    }

    /// Rate granted by the current tier.
    pub fn discount_rate(&self) -> DiscountRate {
        self.discount_tier().rate()
    }

    /// Discount amount: the tier's rate applied to the subtotal, unrounded.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::{Money, Order, Product};
    ///
    /// let mut order = Order::default();
    /// order.add_product(Product::new("Crate", 1, Money::from_major(1000)));
    /// assert_eq!(order.discount(), Money::from_major(50));
    /// ```
    pub fn discount(&self) -> Money {
        discount_for(self.subtotal())
    }

    /// Amount due: subtotal minus discount.
    pub fn final_cost(&self) -> Money {
        let subtotal = self.subtotal();
        subtotal - discount_for(subtotal)
    }

    /// Subtotal the order would have after adding `product`, or `None` when
    /// the product's line total or any running sum leaves the `Decimal`
    /// range.
    ///
    /// Every running sum is checked, so an order only ever holds products
    /// whose subtotal is exact.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::{Money, Order, Product};
    ///
    /// let mut order = Order::default();
    /// order.add_product(Product::new("Widget", 10, Money::from_major(50)));
    ///
    /// let gadget = Product::new("Gadget", 5, Money::from_major(20));
    /// assert_eq!(order.checked_subtotal_with(&gadget), Some(Money::from_major(600)));
    /// ```
    pub fn checked_subtotal_with(&self, product: &Product) -> Option<Money> {
        self.products
            .iter()
            .chain(std::iter::once(product))
            .try_fold(Money::zero(), |acc, p| acc.checked_add(p.checked_line_total()?))
    }

    /// Snapshot of everything the report shows.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from(self)
    }

    /// Human-readable multi-line report. Same order state, same text.
    pub fn report(&self) -> String {
        self.summary().to_string()
    }
}

/// The tier's rate applied to `subtotal`.
pub(crate) fn discount_for(subtotal: Money) -> Money {
    subtotal.apply_rate(DiscountTier::for_subtotal(subtotal).rate())
}

// =============================================================================
// Unit Tests
// =============================================================================
