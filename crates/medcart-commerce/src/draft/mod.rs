//! The in-progress order draft and its record types.

mod customer;
mod payment;
mod prescription;
mod shipping;
mod store;

pub use customer::{CustomerInfo, CustomerUpdate};
pub use payment::PaymentMethod;
pub use prescription::PrescriptionState;
pub use shipping::{AddressType, ShippingInfo, ShippingUpdate};
pub use store::OrderDraft;
