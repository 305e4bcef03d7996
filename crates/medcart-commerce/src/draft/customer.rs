//! Customer information.

use crate::ids::CustomerId;
use serde::{Deserialize, Serialize};

/// Customer details for an order draft.
///
/// Fields hold raw user input; numeric rules (age range, phone shape)
/// live in the customer validator, not here.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomerInfo {
    /// Backend customer ID, set when a directory match is selected.
    pub customer_id: Option<CustomerId>,
    /// Full name.
    pub name: String,
    /// Age as entered.
    pub age: String,
    /// 10-digit phone number.
    pub phone: String,
    /// Email address (optional).
    pub email: String,
    /// Gender.
    pub gender: String,
}

/// A partial update to [`CustomerInfo`].
///
/// `None` fields are left untouched; set fields win over whatever was
/// there before, whether typed or auto-filled from a directory match.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerUpdate {
    pub customer_id: Option<CustomerId>,
    pub name: Option<String>,
    pub age: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
}

impl CustomerInfo {
    /// Shallow-merge an update into this record.
    pub fn apply(&mut self, update: CustomerUpdate) {
        if let Some(customer_id) = update.customer_id {
            self.customer_id = Some(customer_id);
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
    }
}
