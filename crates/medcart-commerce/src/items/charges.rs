//! Charge computation for a draft's item collection.

use crate::error::CommerceError;
use crate::items::OrderItem;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Orders below this subtotal (in rupees) pay the delivery charge.
pub const FREE_DELIVERY_THRESHOLD_RUPEES: i64 = 499;

/// Flat delivery charge in rupees for sub-threshold orders.
pub const DELIVERY_CHARGE: i64 = 40;

/// Flat handling and packaging fee in rupees, applied to every order.
pub const HANDLING_FEE: i64 = 5;

/// Complete charge breakdown for a draft.
///
/// Derived, never stored: recompute on every read so the numbers always
/// reflect the current item collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Charges {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Delivery charge (zero at or above the free-delivery threshold).
    pub delivery_charge: Money,
    /// Handling and packaging fee.
    pub handling_fee: Money,
    /// Final total (subtotal + delivery + handling).
    pub total: Money,
}

/// Compute the charge breakdown for an item collection.
pub fn calculate_charges(items: &[OrderItem]) -> Result<Charges, CommerceError> {
    let subtotal =
        Money::try_sum(items.iter().map(|i| &i.line_total)).ok_or(CommerceError::Overflow)?;

    let delivery_charge = if subtotal < Money::from_rupees(FREE_DELIVERY_THRESHOLD_RUPEES) {
        Money::from_rupees(DELIVERY_CHARGE)
    } else {
        Money::zero()
    };

    let handling_fee = Money::from_rupees(HANDLING_FEE);

    let total = subtotal
        .try_add(&delivery_charge)
        .and_then(|t| t.try_add(&handling_fee))
        .ok_or(CommerceError::Overflow)?;

    Ok(Charges {
        subtotal,
        delivery_charge,
        handling_fee,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::items::CatalogProduct;
    use crate::items::add_product;

    fn items_with_subtotal(rupees: i64) -> Vec<OrderItem> {
        let product = CatalogProduct {
            product_id: ProductId::new("P1"),
            product_name: "Product P1".to_string(),
            sku: "SKU-P1".to_string(),
            selling_price: Money::from_rupees(rupees),
            tax: Money::zero(),
            discount: Money::zero(),
            hsn: "3004".to_string(),
            length_cm: 10.0,
            breadth_cm: 5.0,
            height_cm: 3.0,
            weight_kg: 0.2,
        };
        add_product(&[], &product).unwrap()
    }

    #[test]
    fn test_delivery_charged_below_threshold() {
        let charges = calculate_charges(&items_with_subtotal(498)).unwrap();
        assert_eq!(charges.subtotal, Money::from_rupees(498));
        assert_eq!(charges.delivery_charge, Money::from_rupees(40));
        assert_eq!(charges.handling_fee, Money::from_rupees(5));
        assert_eq!(charges.total, Money::from_rupees(543));
    }

    #[test]
    fn test_free_delivery_at_threshold() {
        let charges = calculate_charges(&items_with_subtotal(499)).unwrap();
        assert_eq!(charges.delivery_charge, Money::zero());
        assert_eq!(charges.total, Money::from_rupees(504));
    }

    #[test]
    fn test_empty_items_still_pay_fees() {
        let charges = calculate_charges(&[]).unwrap();
        assert_eq!(charges.subtotal, Money::zero());
        assert_eq!(charges.delivery_charge, Money::from_rupees(40));
        assert_eq!(charges.total, Money::from_rupees(45));
    }

    #[test]
    fn test_recomputed_per_call() {
        let items = items_with_subtotal(100);
        let first = calculate_charges(&items).unwrap();
        let more = add_product(&items, &CatalogProduct {
            product_id: ProductId::new("P2"),
            product_name: "Product P2".to_string(),
            sku: "SKU-P2".to_string(),
            selling_price: Money::from_rupees(400),
            tax: Money::zero(),
            discount: Money::zero(),
            hsn: "3004".to_string(),
            length_cm: 1.0,
            breadth_cm: 1.0,
            height_cm: 1.0,
            weight_kg: 0.1,
        })
        .unwrap();
        let second = calculate_charges(&more).unwrap();

        assert_eq!(first.subtotal, Money::from_rupees(100));
        assert_eq!(second.subtotal, Money::from_rupees(500));
        assert_eq!(second.delivery_charge, Money::zero());
    }
}
