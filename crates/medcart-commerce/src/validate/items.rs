//! Items tab validation.

use crate::items::OrderItem;

/// Validate the items tab.
///
/// Per-item failures carry the item's 1-based position for display.
pub fn validate_items(items: &[OrderItem]) -> Vec<String> {
    let mut errors = Vec::new();

    if items.is_empty() {
        errors.push("Add at least one item to the order".to_string());
        return errors;
    }

    for (idx, item) in items.iter().enumerate() {
        let position = idx + 1;
        if item.quantity < 1 {
            errors.push(format!("Item {}: quantity must be at least 1", position));
        }
        if !item.selling_price.is_positive() {
            errors.push(format!(
                "Item {}: selling price must be greater than zero",
                position
            ));
        }
    }

    errors
}
