//! # Order Report
//!
//! A frozen snapshot of an order's figures and its text rendering.
//!
//! ## Layout
//! ```text
//! Order ID: A-100
//! Customer Name: Ada
//! Products in this order:
//! Product: Widget, Quantity: 10, Price per Unit: 50.00, Total Cost: 500.00
//! Product: Gadget, Quantity: 5, Price per Unit: 20.00, Total Cost: 100.00
//! Total Cost of Order: 600.00
//! Discount: 0.00
//! Final Cost after Discount: 600.00
//! ```
//!
//! The field set and its order are the contract. Money is rounded half away
//! from zero to two decimals at render time only; the snapshot keeps exact
//! values. The printed final cost is the printed subtotal minus the printed
//! discount, so the three figures always agree on paper.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::order::Order;
use crate::types::{DiscountTier, Product};
use crate::DISPLAY_DECIMALS;

/// One rendered product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&Product> for ProductLine {
    fn from(product: &Product) -> Self {
        ProductLine {
            name: product.name().to_string(),
            quantity: product.quantity(),
            unit_price: product.unit_price(),
            line_total: product.line_total(),
        }
    }
}

/// Everything the order report shows, computed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: String,
    pub customer_name: String,
    pub lines: Vec<ProductLine>,
    pub subtotal: Money,
    pub discount_tier: DiscountTier,
    pub discount: Money,
    pub final_cost: Money,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        let subtotal = order.subtotal();
        let discount_tier = DiscountTier::for_subtotal(subtotal);
        let discount = subtotal.apply_rate(discount_tier.rate());

        OrderSummary {
            order_id: order.order_id().to_string(),
            customer_name: order.customer_name().to_string(),
            lines: order.products().iter().map(ProductLine::from).collect(),
            subtotal,
            discount_tier,
            discount,
            final_cost: subtotal - discount,
        }
    }
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}, Quantity: {}, Price per Unit: {}, Total Cost: {}",
            self.name, self.quantity, self.unit_price, self.line_total
        )
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order ID: {}", self.order_id)?;
        writeln!(f, "Customer Name: {}", self.customer_name)?;
        writeln!(f, "Products in this order:")?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        let subtotal = self.subtotal.round_to(DISPLAY_DECIMALS);
        let discount = self.discount.round_to(DISPLAY_DECIMALS);
        writeln!(f, "Total Cost of Order: {}", subtotal)?;
        writeln!(f, "Discount: {}", discount)?;
        writeln!(f, "Final Cost after Discount: {}", subtotal - discount)
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
    fn test_report_layout() {
        let mut order = Order::new("A-100", "Ada");
        order.add_product(Product::new("Widget", 10, Money::from_major(50)));
        order.add_product(Product::new("Gadget", 5, Money::from_major(20)));

        let expected = "\
Order ID: A-100
Customer Name: Ada
Products in this order:
Product: Widget, Quantity: 10, Price per Unit: 50.00, Total Cost: 500.00
Product: Gadget, Quantity: 5, Price per Unit: 20.00, Total Cost: 100.00
Total Cost of Order: 600.00
Discount: 0.00
Final Cost after Discount: 600.00
";
        assert_eq!(order.report(), expected);
    }

    #[test]
    fn test_empty_order_report_has_no_product_lines() {
        let report = Order::new("", "").report();

        assert!(!report.contains("Product:"));
        assert_eq!(
            report,
            "Order ID: \nCustomer Name: \nProducts in this order:\n\
             Total Cost of Order: 0.00\nDiscount: 0.00\nFinal Cost after Discount: 0.00\n"
        );
    }

    #[test]
    fn test_report_rounds_only_for_display() {
        let mut order = Order::new("B-2", "Lin");
        order.add_product(Product::new("Rack", 1, Money::new(dec!(4999.99))));

        let summary = order.summary();
        assert_eq!(summary.discount.amount(), dec!(249.9995));
        assert_eq!(summary.discount_tier, DiscountTier::Standard);

        let report = order.report();
        assert!(report.contains("Discount: 250.00\n"));
        assert!(report.contains("Final Cost after Discount: 4749.99\n"));
    }

    #[test]
    fn test_printed_final_cost_matches_printed_figures() {
        let mut order = Order::new("B-3", "Lin");
        order.add_product(Product::new("Shelf", 1, Money::new(dec!(1000.10))));

        // exact final cost is 950.095, which alone would print as 950.10
        assert_eq!(order.final_cost().amount(), dec!(950.095));

        let report = order.report();
        assert!(report.contains("Total Cost of Order: 1000.10\n"));
        assert!(report.contains("Discount: 50.01\n"));
        assert!(report.contains("Final Cost after Discount: 950.09\n"));
    }

    #[test]
    fn test_report_is_idempotent() {
        let mut order = Order::new("C-3", "Sam");
        order.add_product(Product::new("Bulk", 100, Money::from_major(45)));

        assert_eq!(order.report(), order.report());
    }

    #[test]
    fn test_summary_matches_order_figures() {
        let mut order = Order::new("D-4", "Kim");
        order.add_product(Product::new("Bulk", 100, Money::from_major(45)));

        let summary = order.summary();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.subtotal, order.subtotal());
        assert_eq!(summary.discount, order.discount());
        assert_eq!(summary.final_cost, order.final_cost());
    }

    #[test]
    fn test_summary_serializes_money_as_strings() {
        let mut order = Order::new("E-5", "Ola");
        order.add_product(Product::new("Widget", 2, Money::from_cents(1050)));

        let json = serde_json::to_value(order.summary()).unwrap();
        assert_eq!(json["subtotal"], "21.00");
        assert_eq!(json["discount_tier"], "none");
        assert_eq!(json["lines"][0]["name"], "Widget");
    }
}
