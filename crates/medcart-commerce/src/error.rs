//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in order-draft operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
