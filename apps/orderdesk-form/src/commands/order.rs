//! # Order Commands
//!
//! The three things a user can do with the order: add a product, show the
//! report, and read the totals.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐  add_product   ┌──────────┐  display_order  ┌─────────┐  │
//! │  │  Empty   │───────────────►│ Products │────────────────►│ Report  │  │
//! │  │  Order   │                │  Added   │◄────────────────│  Text   │  │
//! │  └──────────┘                └──────────┘   add_product   └─────────┘  │
//! │                                                                         │
//! │  The order is never cleared; it lives until the session ends.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use orderdesk_core::{ProductInput, ValidationError};

use crate::error::FormError;
use crate::state::{OrderDetails, OrderSession, OrderTotals};

/// Parses the product fields and appends the product to the order.
///
/// ## Behavior
/// - Parse failure: returns `INVALID_INPUT`, order untouched
/// - Line total or new subtotal outside the decimal range: same as a parse
///   failure
/// - Success: product appended at the end, updated totals returned
/// - Order details are bound before the product is added
pub fn add_product(
    session: &mut OrderSession,
    details: &OrderDetails,
    input: &ProductInput,
) -> Result<OrderTotals, FormError> {
    debug!(
        name = %input.name,
        quantity = %input.quantity,
        unit_price = %input.unit_price,
        "add_product command"
    );

    let product = input.parse()?;
    if session
        .with_order(|order| order.checked_subtotal_with(&product))
        .is_none()
    {
        return Err(ValidationError::out_of_range(product.name()).into());
    }

    session.bind_details(details);
    let totals = session.with_order_mut(|order| {
        order.add_product(product);
        OrderTotals::from(&*order)
    });

    debug!(
        product_count = totals.product_count,
        subtotal = %totals.subtotal,
        "Product added"
    );
    Ok(totals)
}

/// Renders the order report.
///
/// ## Returns
/// The full report text, to be shown verbatim in place of any earlier one
pub fn display_order(session: &mut OrderSession, details: &OrderDetails) -> String {
    debug!("display_order command");

    session.bind_details(details);
    session.with_order(|order| order.report())
}

/// Gets the current order totals.
pub fn get_totals(session: &OrderSession) -> OrderTotals {
    debug!("get_totals command");
    session.with_order(|order| OrderTotals::from(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, INVALID_NUMBER_MESSAGE};
    use crate::state::FormConfig;
    use orderdesk_core::{DiscountTier, Money};

    fn blank() -> OrderDetails {
        OrderDetails::default()
    }

    #[test]
    fn test_add_product_updates_totals() {
        let mut session = OrderSession::default();

        add_product(&mut session, &blank(), &ProductInput::new("Widget", "10", "50.0")).unwrap();
        let totals =
            add_product(&mut session, &blank(), &ProductInput::new("Gadget", "5", "20.0")).unwrap();

        assert_eq!(totals.product_count, 2);
        assert_eq!(totals.subtotal, Money::from_major(600));
        assert_eq!(totals.discount, Money::zero());
        assert_eq!(totals.final_cost, Money::from_major(600));
    }

    #[test]
    fn test_bulk_order_gets_standard_discount() {
        let mut session = OrderSession::default();

        let totals =
            add_product(&mut session, &blank(), &ProductInput::new("Bulk", "100", "45.0")).unwrap();

        assert_eq!(totals.subtotal, Money::from_major(4500));
        assert_eq!(totals.discount_tier, DiscountTier::Standard);
        assert_eq!(totals.discount, Money::from_major(225));
        assert_eq!(totals.final_cost, Money::from_major(4275));
    }

    #[test]
    fn test_overflowing_product_is_rejected() {
        let huge = "70000000000000000000000000000";
        let mut session = OrderSession::default();
        add_product(&mut session, &blank(), &ProductInput::new("First", "1", huge)).unwrap();
        let before = session.with_order(|o| o.clone());

        let details = OrderDetails::new("X-1", "Zed");
        let err = add_product(&mut session, &details, &ProductInput::new("Second", "1", huge))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.message, INVALID_NUMBER_MESSAGE);
        assert_eq!(session.with_order(|o| o.clone()), before);

        let err = add_product(&mut session, &blank(), &ProductInput::new("Double", "2", huge))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(session.with_order(|o| o.product_count()), 1);
    }

    fn subtotal_after<'a>(inputs: impl Iterator<Item = &'a ProductInput>) -> Money {
        let mut session = OrderSession::default();
        for input in inputs {
            let _ = add_product(&mut session, &blank(), input);
        }
        session.with_order(|o| {
            let exact = o
                .products()
                .iter()
                .try_fold(Money::zero(), |acc, p| acc.checked_add(p.checked_line_total()?));
            assert_eq!(exact, Some(o.subtotal()));
            o.subtotal()
        })
    }

    #[test]
    fn test_subtotal_matches_line_sum_in_either_add_order() {
        let huge = "70000000000000000000000000000";
        let inputs = [
            ProductInput::new("A", "1", huge),
            ProductInput::new("B", "1", huge),
            ProductInput::new("C", "-1", huge),
        ];
        let huge = inputs[0].parse().unwrap().unit_price();

        // B would overflow after A and is refused; C brings the total to zero
        assert_eq!(subtotal_after(inputs.iter()), Money::zero());
        // C, B, A all fit
        assert_eq!(subtotal_after(inputs.iter().rev()), huge);
    }

    #[test]
    fn test_invalid_quantity_leaves_order_unchanged() {
        let mut session = OrderSession::default();
        add_product(&mut session, &blank(), &ProductInput::new("Widget", "1", "5")).unwrap();

        let err = add_product(&mut session, &blank(), &ProductInput::new("Gadget", "abc", "5"))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.message, INVALID_NUMBER_MESSAGE);
        assert_eq!(get_totals(&session).product_count, 1);
    }

    #[test]
    fn test_invalid_input_does_not_bind_details() {
        let mut session = OrderSession::default();
        let details = OrderDetails::new("A-1", "Ada");

        let _ = add_product(&mut session, &details, &ProductInput::new("X", "1", "ten"));

        assert_eq!(session.with_order(|o| o.order_id().to_string()), "");
    }

    #[test]
    fn test_display_order_binds_details() {
        let mut session = OrderSession::default();
        let details = OrderDetails::new("A-100", "Ada");

        let report = display_order(&mut session, &details);

        assert!(report.starts_with("Order ID: A-100\nCustomer Name: Ada\n"));
    }

    #[test]
    fn test_display_order_can_keep_blank_details() {
        let config = FormConfig {
            bind_order_details: false,
            ..FormConfig::default()
        };
        let mut session = OrderSession::new(&config);

        let report = display_order(&mut session, &OrderDetails::new("A-100", "Ada"));

        assert!(report.starts_with("Order ID: \nCustomer Name: \n"));
    }

    #[test]
    fn test_display_order_is_repeatable() {
        let mut session = OrderSession::default();
        add_product(&mut session, &blank(), &ProductInput::new("Widget", "3", "2.5")).unwrap();

        let first = display_order(&mut session, &blank());
        let second = display_order(&mut session, &blank());
        assert_eq!(first, second);
    }
}
