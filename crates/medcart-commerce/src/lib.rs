//! Order-draft domain types and logic for medcart.
//!
//! This crate provides the pure, synchronous core of the order-creation
//! workflow:
//!
//! - **Draft**: the in-progress order (customer, shipping, prescription,
//!   payment method, line items)
//! - **Items**: line-item aggregation and charge computation
//! - **Validate**: per-tab validators producing human-readable error lists
//!
//! Everything here is side-effect-free; network collaborators and the
//! submission state machine live in `medcart-workflow`.
//!
//! # Example
//!
//! ```rust,ignore
//! use medcart_commerce::prelude::*;
//!
//! let mut draft = OrderDraft::new();
//! draft.update_customer(CustomerUpdate {
//!     name: Some("Asha Verma".into()),
//!     phone: Some("9876543210".into()),
//!     ..Default::default()
//! });
//!
//! let items = add_product(&draft.items, &product)?;
//! draft.set_items(items);
//!
//! let charges = calculate_charges(&draft.items)?;
//! println!("Total: {}", charges.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod draft;
pub mod items;
pub mod validate;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Draft
    pub use crate::draft::{
        AddressType, CustomerInfo, CustomerUpdate, OrderDraft, PaymentMethod, PrescriptionState,
        ShippingInfo, ShippingUpdate,
    };

    // Items
    pub use crate::items::{
        add_product, calculate_charges, remove_item, update_quantity, CatalogProduct, Charges,
        OrderItem,
    };

    // Validate
    pub use crate::validate::{
        validate_customer, validate_items, validate_shipping, DraftTab, ValidationErrors,
    };
}
