//! Draft line item types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as returned by catalog search, ready to be added to a draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogProduct {
    /// Product identifier.
    pub product_id: ProductId,
    /// Display name.
    pub product_name: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Unit selling price.
    pub selling_price: Money,
    /// Tax per unit.
    pub tax: Money,
    /// Discount per unit.
    pub discount: Money,
    /// HSN classification code.
    pub hsn: String,
    /// Package length in cm.
    pub length_cm: f64,
    /// Package breadth in cm.
    pub breadth_cm: f64,
    /// Package height in cm.
    pub height_cm: f64,
    /// Package weight in kg.
    pub weight_kg: f64,
}

/// A line item in an order draft.
///
/// `product_id` is unique within a draft's item collection; adding a
/// product that is already present increments its quantity instead of
/// appending a second row (see [`crate::items::add_product`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit selling price.
    pub selling_price: Money,
    /// Tax per unit.
    pub tax: Money,
    /// Discount per unit.
    pub discount: Money,
    /// HSN classification code.
    pub hsn: String,
    /// Package length in cm.
    pub length_cm: f64,
    /// Package breadth in cm.
    pub breadth_cm: f64,
    /// Package height in cm.
    pub height_cm: f64,
    /// Package weight in kg.
    pub weight_kg: f64,
    /// Line total (selling_price * quantity).
    pub line_total: Money,
}

impl OrderItem {
    /// Create a line item from a catalog product with quantity 1.
    pub fn from_product(product: &CatalogProduct) -> Self {
        Self {
            product_id: product.product_id.clone(),
            product_name: product.product_name.clone(),
            sku: product.sku.clone(),
            quantity: 1,
            selling_price: product.selling_price,
            tax: product.tax,
            discount: product.discount,
            hsn: product.hsn.clone(),
            length_cm: product.length_cm,
            breadth_cm: product.breadth_cm,
            height_cm: product.height_cm,
            weight_kg: product.weight_kg,
            line_total: product.selling_price,
        }
    }

    /// Return a copy with the given quantity and a recomputed line total.
    ///
    /// Quantities below one are rejected; removal goes through
    /// [`crate::items::remove_item`] instead.
    pub fn with_quantity(&self, quantity: i64) -> Result<Self, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        let line_total = self
            .selling_price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            quantity,
            line_total,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, rupees: i64) -> CatalogProduct {
        CatalogProduct {
            product_id: ProductId::new(id),
            product_name: format!("Product {}", id),
            sku: format!("SKU-{}", id),
            selling_price: Money::from_rupees(rupees),
            tax: Money::zero(),
            discount: Money::zero(),
            hsn: "3004".to_string(),
            length_cm: 10.0,
            breadth_cm: 5.0,
            height_cm: 3.0,
            weight_kg: 0.2,
        }
    }

    #[test]
    fn test_from_product_starts_at_one() {
        let item = OrderItem::from_product(&product("P1", 100));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.line_total, Money::from_rupees(100));
    }

    #[test]
    fn test_with_quantity_recomputes_total() {
        let item = OrderItem::from_product(&product("P1", 100));
        let item = item.with_quantity(3).unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.line_total, Money::from_rupees(300));
    }

    #[test]
    fn test_with_quantity_rejects_below_one() {
        let item = OrderItem::from_product(&product("P1", 100));
        assert!(matches!(
            item.with_quantity(0),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(matches!(
            item.with_quantity(-2),
            Err(CommerceError::InvalidQuantity(-2))
        ));
    }
}
