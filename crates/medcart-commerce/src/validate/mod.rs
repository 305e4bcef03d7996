//! Per-tab validation.
//!
//! Validators are pure functions returning human-readable error lists;
//! they never throw and calling one twice on unchanged input yields an
//! identical list. Order of messages is display order only.

mod customer;
mod items;
mod patterns;
mod shipping;

pub use customer::validate_customer;
pub use items::validate_items;
pub use shipping::validate_shipping;

use serde::{Deserialize, Serialize};

/// Steps in the order-creation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DraftTab {
    /// Customer information.
    #[default]
    Customer,
    /// Shipping address.
    Shipping,
    /// Prescription attachments.
    Prescription,
    /// Line items and totals.
    Items,
}

impl DraftTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftTab::Customer => "customer",
            DraftTab::Shipping => "shipping",
            DraftTab::Prescription => "prescription",
            DraftTab::Items => "items",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DraftTab::Customer => "Customer Information",
            DraftTab::Shipping => "Shipping Details",
            DraftTab::Prescription => "Prescription",
            DraftTab::Items => "Order Items",
        }
    }

    /// Get the tab number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            DraftTab::Customer => 1,
            DraftTab::Shipping => 2,
            DraftTab::Prescription => 3,
            DraftTab::Items => 4,
        }
    }

    /// The tab after this one, if any.
    pub fn next(&self) -> Option<DraftTab> {
        match self {
            DraftTab::Customer => Some(DraftTab::Shipping),
            DraftTab::Shipping => Some(DraftTab::Prescription),
            DraftTab::Prescription => Some(DraftTab::Items),
            DraftTab::Items => None,
        }
    }

    /// The tab before this one, if any.
    pub fn previous(&self) -> Option<DraftTab> {
        match self {
            DraftTab::Customer => None,
            DraftTab::Shipping => Some(DraftTab::Customer),
            DraftTab::Prescription => Some(DraftTab::Shipping),
            DraftTab::Items => Some(DraftTab::Prescription),
        }
    }
}

/// Per-tab validation error lists.
///
/// Each list is fully replaced (never merged) when its tab's validator
/// runs. The prescription tab has no validator and no list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ValidationErrors {
    /// Customer tab errors.
    pub customer: Vec<String>,
    /// Shipping tab errors.
    pub shipping: Vec<String>,
    /// Items tab errors.
    pub items: Vec<String>,
}

impl ValidationErrors {
    /// Check that no tab has errors.
    pub fn is_empty(&self) -> bool {
        self.customer.is_empty() && self.shipping.is_empty() && self.items.is_empty()
    }

    /// Get the error list for a tab (prescription never has errors).
    pub fn for_tab(&self, tab: DraftTab) -> &[String] {
        match tab {
            DraftTab::Customer => &self.customer,
            DraftTab::Shipping => &self.shipping,
            DraftTab::Prescription => &[],
            DraftTab::Items => &self.items,
        }
    }
}
