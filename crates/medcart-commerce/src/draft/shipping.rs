//! Shipping address information.

use serde::{Deserialize, Serialize};

/// Kind of delivery address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    Home,
    Work,
    Other,
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Home => "home",
            AddressType::Work => "work",
            AddressType::Other => "other",
        }
    }
}

/// Shipping details for an order draft.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingInfo {
    /// Address line 1.
    pub address_line1: String,
    /// Address line 2 (apt, floor, etc.).
    pub address_line2: String,
    /// Nearby landmark.
    pub landmark: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// 6-digit postal code.
    pub pincode: String,
    /// Country.
    pub country: String,
    /// Address type.
    pub address_type: AddressType,
}

/// A partial update to [`ShippingInfo`].
///
/// Applying a saved address and typing into a field go through the same
/// merge, so a manual edit after an auto-fill simply wins for that field.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShippingUpdate {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub landmark: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub country: Option<String>,
    pub address_type: Option<AddressType>,
}

impl ShippingInfo {
    /// Shallow-merge an update into this record.
    pub fn apply(&mut self, update: ShippingUpdate) {
        if let Some(address_line1) = update.address_line1 {
            self.address_line1 = address_line1;
        }
        if let Some(address_line2) = update.address_line2 {
            self.address_line2 = address_line2;
        }
        if let Some(landmark) = update.landmark {
            self.landmark = landmark;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(state) = update.state {
            self.state = state;
        }
        if let Some(pincode) = update.pincode {
            self.pincode = pincode;
        }
        if let Some(country) = update.country {
            self.country = country;
        }
        if let Some(address_type) = update.address_type {
            self.address_type = address_type;
        }
    }
}
