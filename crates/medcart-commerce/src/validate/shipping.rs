//! Shipping tab validation.

use crate::draft::ShippingInfo;
use crate::validate::patterns;

/// Validate the shipping tab.
pub fn validate_shipping(shipping: &ShippingInfo) -> Vec<String> {
    let mut errors = Vec::new();

    if shipping.address_line1.trim().is_empty() {
        errors.push("Address line 1 is required".to_string());
    }

    if shipping.city.trim().is_empty() {
        errors.push("City is required".to_string());
    }

    if shipping.state.trim().is_empty() {
        errors.push("State is required".to_string());
    }

    if shipping.pincode.trim().is_empty() {
        errors.push("Pincode is required".to_string());
    } else if !patterns::pincode().is_match(&shipping.pincode) {
        errors.push("Pincode must be exactly 6 digits".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::AddressType;

    fn valid_shipping() -> ShippingInfo {
        ShippingInfo {
            address_line1: "12 MG Road".to_string(),
            address_line2: String::new(),
            landmark: String::new(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            country: "India".to_string(),
            address_type: AddressType::Home,
        }
    }

    #[test]
    fn test_valid_shipping_passes() {
        assert!(validate_shipping(&valid_shipping()).is_empty());
    }

    #[test]
    fn test_empty_shipping_reports_required() {
        let errors = validate_shipping(&ShippingInfo::default());
        assert_eq!(errors.len(), 4); // address1, city, state, pincode
    }

    #[test]
    fn test_pincode_boundaries() {
        let mut shipping = valid_shipping();
        shipping.pincode = "12345".to_string();
        assert_eq!(validate_shipping(&shipping).len(), 1);

        shipping.pincode = "123456".to_string();
        assert!(validate_shipping(&shipping).is_empty());

        shipping.pincode = "1234567".to_string();
        assert_eq!(validate_shipping(&shipping).len(), 1);
    }

    #[test]
    fn test_optional_fields_not_required() {
        let mut shipping = valid_shipping();
        shipping.address_line2 = String::new();
        shipping.landmark = String::new();
        assert!(validate_shipping(&shipping).is_empty());
    }
}
