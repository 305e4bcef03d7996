//! Workflow error types.

use crate::clients::ClientError;
use medcart_commerce::CommerceError;
use thiserror::Error;

/// Errors surfaced by the order-creation workflow.
///
/// All of these are values returned to the caller; external-call
/// failures are caught at the orchestrator boundary and never propagate
/// as panics.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The active tab failed validation.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Submit was triggered with no items in the draft.
    #[error("Order has no items")]
    EmptyOrder,

    /// No courier can deliver to the destination pincode.
    #[error("service not available")]
    ServiceUnavailable,

    /// A submission is already in flight for this draft.
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// The requested transition is not allowed from the current state.
    #[error("Invalid transition from {from}")]
    InvalidTransition { from: String },

    /// An external call exceeded the configured timeout.
    #[error("External call timed out")]
    Timeout,

    /// The upload collaborator reported failure.
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// An external call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A domain-level failure (e.g. charge overflow).
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
