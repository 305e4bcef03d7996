//! The order draft store.

use crate::draft::{
    CustomerInfo, CustomerUpdate, PaymentMethod, PrescriptionState, ShippingInfo, ShippingUpdate,
};
use crate::items::OrderItem;
use crate::validate::{
    validate_customer, validate_items, validate_shipping, DraftTab, ValidationErrors,
};
use serde::{Deserialize, Serialize};

/// Single source of truth for an in-progress order.
///
/// One draft exists per order-creation session and is constructed
/// explicitly by whoever owns the workflow; there is no global instance.
/// The store holds state and shape only; business validation lives in
/// the tab validators and item aggregation in [`crate::items`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderDraft {
    /// Customer details.
    pub customer: CustomerInfo,
    /// Shipping address.
    pub shipping: ShippingInfo,
    /// Prescription attachments.
    pub prescription: PrescriptionState,
    /// Line items.
    pub items: Vec<OrderItem>,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Last validation result per tab.
    pub validation_errors: ValidationErrors,
}

impl OrderDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow-merge a customer update.
    pub fn update_customer(&mut self, update: CustomerUpdate) {
        self.customer.apply(update);
    }

    /// Shallow-merge a shipping update.
    pub fn update_shipping(&mut self, update: ShippingUpdate) {
        self.shipping.apply(update);
    }

    /// Replace the item collection.
    ///
    /// Callers compute the new collection through [`crate::items`]; the
    /// store does no de-duplication of its own.
    pub fn set_items(&mut self, items: Vec<OrderItem>) {
        self.items = items;
    }

    /// Replace the prescription URL list.
    pub fn set_prescription_urls(&mut self, urls: Vec<String>) {
        self.prescription.urls = urls;
    }

    /// Append an uploaded prescription URL.
    pub fn push_prescription_url(&mut self, url: impl Into<String>) {
        self.prescription.push_url(url);
    }

    /// Remove a prescription URL by index.
    pub fn remove_prescription_url(&mut self, index: usize) -> Option<String> {
        self.prescription.remove_url(index)
    }

    /// Set whether the order contains prescription-required items.
    pub fn set_prescription_items(&mut self, prescription_items: bool) {
        self.prescription.prescription_items = prescription_items;
    }

    /// Set the payment method.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Run the given tab's validator against current state.
    ///
    /// The tab's stored error list is fully replaced with the result.
    /// Returns `true` iff the list is empty. The prescription tab has no
    /// checks and always validates.
    pub fn validate_tab(&mut self, tab: DraftTab) -> bool {
        match tab {
            DraftTab::Customer => {
                self.validation_errors.customer = validate_customer(&self.customer);
                self.validation_errors.customer.is_empty()
            }
            DraftTab::Shipping => {
                self.validation_errors.shipping = validate_shipping(&self.shipping);
                self.validation_errors.shipping.is_empty()
            }
            DraftTab::Prescription => true,
            DraftTab::Items => {
                self.validation_errors.items = validate_items(&self.items);
                self.validation_errors.items.is_empty()
            }
        }
    }

    /// Restore every field to its empty initial value.
    ///
    /// Called after a successful submission and on explicit discard, so
    /// no stale data leaks into the next draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::AddressType;
    use crate::ids::{CustomerId, ProductId};
    use crate::items::{add_product, CatalogProduct};
    use crate::money::Money;

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

    fn populated_draft() -> OrderDraft {
        let mut draft = OrderDraft::new();
        draft.update_customer(CustomerUpdate {
            customer_id: Some(CustomerId::new("C1")),
            name: Some("Asha Verma".to_string()),
            age: Some("34".to_string()),
            phone: Some("9876543210".to_string()),
            email: Some("asha@example.com".to_string()),
            gender: Some("female".to_string()),
        });
        draft.update_shipping(ShippingUpdate {
            address_line1: Some("12 MG Road".to_string()),
            city: Some("Bengaluru".to_string()),
            state: Some("Karnataka".to_string()),
            pincode: Some("560001".to_string()),
            country: Some("India".to_string()),
            address_type: Some(AddressType::Work),
            ..Default::default()
        });
        draft.set_prescription_items(true);
        draft.push_prescription_url("https://cdn.example.com/rx/1.jpg");
        draft.set_payment_method(PaymentMethod::Prepaid);
        draft.set_items(add_product(&[], &product("P1", 100)).unwrap());
        draft
    }

    #[test]
    fn test_validate_tab_stores_and_replaces_errors() {
        let mut draft = OrderDraft::new();
        assert!(!draft.validate_tab(DraftTab::Customer));
        let first_count = draft.validation_errors.customer.len();
        assert!(first_count > 0);

        draft.update_customer(CustomerUpdate {
            name: Some("Asha Verma".to_string()),
            age: Some("34".to_string()),
            phone: Some("9876543210".to_string()),
            gender: Some("female".to_string()),
            ..Default::default()
        });
        assert!(draft.validate_tab(DraftTab::Customer));
        assert!(draft.validation_errors.customer.is_empty());
    }

    #[test]
    fn test_prescription_tab_always_validates() {
        let mut draft = OrderDraft::new();
        draft.set_prescription_items(true);
        // No URL attached, still passes.
        assert!(draft.validate_tab(DraftTab::Prescription));
    }

    #[test]
    fn test_set_items_is_full_replace() {
        let mut draft = populated_draft();
        draft.set_items(Vec::new());
        assert!(draft.items.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut draft = populated_draft();
        draft.validate_tab(DraftTab::Customer);
        draft.reset();
        assert_eq!(draft, OrderDraft::default());
    }
}
