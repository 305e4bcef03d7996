//! Item collection operations.
//!
//! All operations return a new `Vec` and never mutate their input. Callers
//! (the draft store, undo/redo, UI re-rendering) rely on the old collection
//! staying intact.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::items::{CatalogProduct, OrderItem};

/// Add a product to the item collection.
///
/// If an item with the same `product_id` already exists, its quantity is
/// incremented by 1 and its line total recomputed; otherwise a new item
/// with quantity 1 is appended.
pub fn add_product(
    items: &[OrderItem],
    product: &CatalogProduct,
) -> Result<Vec<OrderItem>, CommerceError> {
    if let Some(pos) = items.iter().position(|i| i.product_id == product.product_id) {
        let mut next = items.to_vec();
        let quantity = next[pos]
            .quantity
            .checked_add(1)
            .ok_or(CommerceError::Overflow)?;
        next[pos] = next[pos].with_quantity(quantity)?;
        return Ok(next);
    }

    let mut next = items.to_vec();
    next.push(OrderItem::from_product(product));
    Ok(next)
}

/// Replace an item's quantity.
///
/// A quantity below 1 is a no-op: the collection is returned unchanged.
/// Unknown product IDs are also a no-op.
pub fn update_quantity(items: &[OrderItem], product_id: &ProductId, quantity: i64) -> Vec<OrderItem> {
    if quantity < 1 {
        return items.to_vec();
    }
    items
        .iter()
        .map(|item| {
            if &item.product_id == product_id {
                // Quantity is bounded by the no-op guard above, so the only
                // failure mode is overflow; keep the row unchanged in that case.
                item.with_quantity(quantity).unwrap_or_else(|_| item.clone())
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Remove the item with the given product ID.
pub fn remove_item(items: &[OrderItem], product_id: &ProductId) -> Vec<OrderItem> {
    items
        .iter()
        .filter(|i| &i.product_id != product_id)
        .cloned()
        .collect()
}
