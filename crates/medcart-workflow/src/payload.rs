//! Backend-shaped order payload.

use medcart_commerce::draft::OrderDraft;
use medcart_commerce::items::{Charges, OrderItem};
use serde::{Deserialize, Serialize};

/// The order-creation request body.
///
/// A derived snapshot of the draft plus computed charges; building it
/// never mutates the store. Field names are the backend's, customer and
/// billing fields mapped 1:1 from the draft records. Amounts are rupees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPayload {
    pub customer_id: Option<String>,
    pub billing_customer_name: String,
    pub billing_age: String,
    pub billing_phone: String,
    pub billing_email: String,
    pub billing_gender: String,
    pub billing_address: String,
    pub billing_address_2: String,
    pub billing_landmark: String,
    pub billing_city: String,
    pub billing_state: String,
    pub billing_pincode: String,
    pub billing_country: String,
    pub billing_address_type: String,
    pub payment_method: String,
    pub sub_total: f64,
    pub shipping_charges: f64,
    pub handling_fee: f64,
    pub total: f64,
    pub prescription_url: Option<String>,
    pub order_items: Vec<PayloadItem>,
}

/// One order line in the request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadItem {
    pub name: String,
    pub sku: String,
    pub units: i64,
    pub selling_price: f64,
    pub tax: f64,
    pub discount: f64,
    pub hsn: String,
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
    pub weight: f64,
}

impl PayloadItem {
    fn from_item(item: &OrderItem) -> Self {
        Self {
            name: item.product_name.clone(),
            sku: item.sku.clone(),
            units: item.quantity,
            selling_price: item.selling_price.to_decimal(),
            tax: item.tax.to_decimal(),
            discount: item.discount.to_decimal(),
            hsn: item.hsn.clone(),
            length: item.length_cm,
            breadth: item.breadth_cm,
            height: item.height_cm,
            weight: item.weight_kg,
        }
    }
}

impl OrderPayload {
    /// Build the payload from a draft and its computed charges.
    pub fn from_draft(draft: &OrderDraft, charges: &Charges) -> Self {
        Self {
            customer_id: draft
                .customer
                .customer_id
                .as_ref()
                .map(|id| id.as_str().to_string()),
            billing_customer_name: draft.customer.name.clone(),
            billing_age: draft.customer.age.clone(),
            billing_phone: draft.customer.phone.clone(),
            billing_email: draft.customer.email.clone(),
            billing_gender: draft.customer.gender.clone(),
            billing_address: draft.shipping.address_line1.clone(),
            billing_address_2: draft.shipping.address_line2.clone(),
            billing_landmark: draft.shipping.landmark.clone(),
            billing_city: draft.shipping.city.clone(),
            billing_state: draft.shipping.state.clone(),
            billing_pincode: draft.shipping.pincode.clone(),
            billing_country: draft.shipping.country.clone(),
            billing_address_type: draft.shipping.address_type.as_str().to_string(),
            payment_method: draft.payment_method.as_str().to_string(),
            sub_total: charges.subtotal.to_decimal(),
            shipping_charges: charges.delivery_charge.to_decimal(),
            handling_fee: charges.handling_fee.to_decimal(),
            total: charges.total.to_decimal(),
            prescription_url: draft.prescription.primary_url().map(String::from),
            order_items: draft.items.iter().map(PayloadItem::from_item).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcart_commerce::draft::{CustomerUpdate, ShippingUpdate};
    use medcart_commerce::ids::{CustomerId, ProductId};
    use medcart_commerce::items::{add_product, calculate_charges, CatalogProduct};
    use medcart_commerce::money::Money;

    fn draft_with_item() -> OrderDraft {
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
            ..Default::default()
        });
        let product = CatalogProduct {
            product_id: ProductId::new("P1"),
            product_name: "Paracetamol 500mg".to_string(),
            sku: "SKU-P1".to_string(),
            selling_price: Money::from_rupees(120),
            tax: Money::from_rupees(6),
            discount: Money::zero(),
            hsn: "3004".to_string(),
            length_cm: 10.0,
            breadth_cm: 5.0,
            height_cm: 3.0,
            weight_kg: 0.2,
        };
        draft.set_items(add_product(&[], &product).unwrap());
        draft
    }

    #[test]
    fn test_fields_map_one_to_one() {
        let draft = draft_with_item();
        let charges = calculate_charges(&draft.items).unwrap();
        let payload = OrderPayload::from_draft(&draft, &charges);

        assert_eq!(payload.customer_id.as_deref(), Some("C1"));
        assert_eq!(payload.billing_customer_name, "Asha Verma");
        assert_eq!(payload.billing_pincode, "560001");
        assert_eq!(payload.billing_address_type, "home");
        assert_eq!(payload.payment_method, "cod");
        assert_eq!(payload.order_items.len(), 1);
        assert_eq!(payload.order_items[0].units, 1);
        assert_eq!(payload.order_items[0].selling_price, 120.0);
    }

    #[test]
    fn test_charges_in_rupees() {
        let draft = draft_with_item();
        let charges = calculate_charges(&draft.items).unwrap();
        let payload = OrderPayload::from_draft(&draft, &charges);

        assert_eq!(payload.sub_total, 120.0);
        assert_eq!(payload.shipping_charges, 40.0);
        assert_eq!(payload.handling_fee, 5.0);
        assert_eq!(payload.total, 165.0);
    }

    #[test]
    fn test_first_prescription_url_only() {
        let mut draft = draft_with_item();
        assert_eq!(
            OrderPayload::from_draft(&draft, &calculate_charges(&draft.items).unwrap())
                .prescription_url,
            None
        );

        draft.push_prescription_url("https://cdn.example.com/rx/1.jpg");
        draft.push_prescription_url("https://cdn.example.com/rx/2.jpg");
        let payload =
            OrderPayload::from_draft(&draft, &calculate_charges(&draft.items).unwrap());
        assert_eq!(
            payload.prescription_url.as_deref(),
            Some("https://cdn.example.com/rx/1.jpg")
        );
    }

    #[test]
    fn test_building_does_not_mutate_draft() {
        let draft = draft_with_item();
        let before = draft.clone();
        let charges = calculate_charges(&draft.items).unwrap();
        let _ = OrderPayload::from_draft(&draft, &charges);
        assert_eq!(draft, before);
    }
}
