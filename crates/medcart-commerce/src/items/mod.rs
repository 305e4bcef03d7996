//! Line items: aggregation and charge computation.

mod aggregate;
mod charges;
mod item;

pub use aggregate::{add_product, remove_item, update_quantity};
pub use charges::{calculate_charges, Charges, DELIVERY_CHARGE, FREE_DELIVERY_THRESHOLD_RUPEES, HANDLING_FEE};
pub use item::{CatalogProduct, OrderItem};
