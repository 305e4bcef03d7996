//! Customer tab validation.

use crate::draft::CustomerInfo;
use crate::validate::patterns;

/// Validate the customer tab.
///
/// Returns one message per failed check, in display order.
pub fn validate_customer(customer: &CustomerInfo) -> Vec<String> {
    let mut errors = Vec::new();

    if customer.name.trim().is_empty() {
        errors.push("Customer name is required".to_string());
    }

    if customer.age.trim().is_empty() {
        errors.push("Age is required".to_string());
    } else {
        match customer.age.parse::<i64>() {
            Ok(age) if (1..=120).contains(&age) => {}
            _ => errors.push("Age must be a whole number between 1 and 120".to_string()),
        }
    }

    if customer.phone.trim().is_empty() {
        errors.push("Phone number is required".to_string());
    } else if !patterns::phone().is_match(&customer.phone) {
        errors.push("Phone number must be exactly 10 digits".to_string());
    }

    if customer.gender.trim().is_empty() {
        errors.push("Gender is required".to_string());
    }

    if !customer.email.is_empty() && !patterns::email().is_match(&customer.email) {
        errors.push("Email address is not valid".to_string());
    }

    errors
}
