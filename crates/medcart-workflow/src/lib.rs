//! Serviceability and submission orchestration for medcart order drafts.
//!
//! This crate owns everything asynchronous in the order-creation
//! workflow:
//!
//! - **Clients**: trait seams for the external REST collaborators
//!   (product search, customer directory, file upload, serviceability,
//!   order submission)
//! - **Orchestrator**: the tab-by-tab state machine that validates,
//!   checks serviceability, builds the order payload, and submits
//! - **Search**: generation-counter product search where only the
//!   latest response updates visible results
//! - **Uploads**: prescription image upload and attachment
//!
//! The pure domain (draft store, validators, item aggregation, charges)
//! lives in `medcart-commerce`.

pub mod clients;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod payload;
pub mod routing;
pub mod search;
pub mod state;
pub mod uploads;

pub use error::WorkflowError;
pub use orchestrator::PlaceOrderWorkflow;
pub use state::WorkflowState;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::clients::{
        ClientError, CourierCompany, CustomerDirectoryClient, CustomerRecord, CustomerSearchPage,
        FileUploadClient, OrderSubmissionClient, ProductSearchClient, ProductSearchPage,
        SavedAddress, ServiceabilityClient, ServiceabilityRequest, ServiceabilityResponse,
        SubmissionReceipt, UploadRequest, UploadResponse,
    };
    pub use crate::config::WorkflowConfig;
    pub use crate::error::WorkflowError;
    pub use crate::orchestrator::PlaceOrderWorkflow;
    pub use crate::payload::{OrderPayload, PayloadItem};
    pub use crate::routing::{variant_for, SubmissionVariant};
    pub use crate::search::SearchSession;
    pub use crate::state::WorkflowState;
    pub use crate::uploads::PrescriptionUploader;
}
