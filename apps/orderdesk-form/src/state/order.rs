//! # Order Session State
//!
//! Owns the one order a form session works on.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Session Operations                             │
//! │                                                                         │
//! │  Form Action              Command                 Order Change          │
//! │  ───────────              ───────                 ────────────          │
//! │                                                                         │
//! │  "add" ──────────────────► add_product() ───────► products.push(p)     │
//! │                                                                         │
//! │  "display" ──────────────► display_order() ─────► (read only)          │
//! │                                                                         │
//! │  "totals" ───────────────► get_totals() ────────► (read only)          │
//! │                                                                         │
//! │  NOTE: The session is owned by the console loop and passed by          │
//! │        reference; there is no shared or static order.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use orderdesk_core::{DiscountRate, DiscountTier, Money, Order};

use crate::state::FormConfig;

/// Order id and customer name as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub order_id: String,
    pub customer_name: String,
}

impl OrderDetails {
    pub fn new(order_id: impl Into<String>, customer_name: impl Into<String>) -> Self {
        OrderDetails {
            order_id: order_id.into(),
            customer_name: customer_name.into(),
        }
    }
}

/// Order totals summary for command responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub product_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub discount_tier: DiscountTier,
    /// Rate of the tier, in basis points
    pub discount_rate: DiscountRate,
    pub discount: Money,
    pub final_cost: Money,
}

impl From<&Order> for OrderTotals {
    fn from(order: &Order) -> Self {
        let summary = order.summary();
        OrderTotals {
            product_count: summary.lines.len(),
            total_quantity: summary
                .lines
                .iter()
                .fold(0i64, |acc, line| acc.saturating_add(line.quantity)),
            subtotal: summary.subtotal,
            discount_tier: summary.discount_tier,
            discount_rate: order.discount_rate(),
            discount: summary.discount,
            final_cost: summary.final_cost,
        }
    }
}

/// The session's order plus the binding policy for its details.
#[derive(Debug)]
pub struct OrderSession {
    order: Order,
    bind_details: bool,
}

impl OrderSession {
    /// Creates the session order from configuration.
    pub fn new(config: &FormConfig) -> Self {
        OrderSession {
            order: Order::new(config.order_id.clone(), config.customer_name.clone()),
            bind_details: config.bind_order_details,
        }
    }

    /// Copies the typed details into the order, if binding is enabled.
    pub fn bind_details(&mut self, details: &OrderDetails) {
        if self.bind_details {
            self.order
                .set_details(details.order_id.clone(), details.customer_name.clone());
        }
    }

    /// Executes a function with read access to the order.
    pub fn with_order<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Order) -> R,
    {
        f(&self.order)
    }

    /// Executes a function with write access to the order.
    pub fn with_order_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Order) -> R,
    {
        f(&mut self.order)
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_core::Product;

    #[test]
    fn test_session_starts_from_config() {
        let config = FormConfig {
            order_id: "A-1".to_string(),
            customer_name: "Ada".to_string(),
            ..FormConfig::default()
        };
        let session = OrderSession::new(&config);

        session.with_order(|order| {
            assert_eq!(order.order_id(), "A-1");
            assert_eq!(order.customer_name(), "Ada");
            assert!(order.is_empty());
        });
    }

    #[test]
    fn test_bind_details_when_enabled() {
        let mut session = OrderSession::default();
        session.bind_details(&OrderDetails::new("B-2", "Lin"));

        assert_eq!(session.with_order(|o| o.order_id().to_string()), "B-2");
        assert_eq!(session.with_order(|o| o.customer_name().to_string()), "Lin");
    }

    #[test]
    fn test_bind_details_when_disabled() {
        let config = FormConfig {
            bind_order_details: false,
            ..FormConfig::default()
        };
        let mut session = OrderSession::new(&config);
        session.bind_details(&OrderDetails::new("B-2", "Lin"));

        assert_eq!(session.with_order(|o| o.order_id().to_string()), "");
    }

    #[test]
    fn test_totals_from_order() {
        let mut session = OrderSession::default();
        session.with_order_mut(|o| {
            o.add_product(Product::new("Widget", 10, Money::from_major(50)));
            o.add_product(Product::new("Gadget", 5, Money::from_major(20)));
        });

        let totals = session.with_order(|o| OrderTotals::from(o));
        assert_eq!(totals.product_count, 2);
        assert_eq!(totals.total_quantity, 15);
        assert_eq!(totals.subtotal, Money::from_major(600));
        assert_eq!(totals.discount_tier, DiscountTier::None);
        assert_eq!(totals.discount_rate, DiscountRate::zero());
        assert_eq!(totals.final_cost, Money::from_major(600));
    }
}
