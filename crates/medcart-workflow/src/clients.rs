//! External collaborator interfaces.
//!
//! Each remote service the workflow talks to is a trait seam, so the
//! orchestrator can be driven against mocks in tests. Wire DTOs are
//! typed; a response that does not deserialize into its expected shape
//! is rejected at this boundary instead of flowing through untyped.

use crate::payload::OrderPayload;
use crate::routing::SubmissionVariant;
use async_trait::async_trait;
use medcart_commerce::draft::{AddressType, CustomerUpdate, ShippingUpdate};
use medcart_commerce::ids::{AddressId, CustomerId, OrderId};
use medcart_commerce::items::CatalogProduct;
use serde::{Deserialize, Serialize};

/// Error type for external calls.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

/// One page of product search results.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductSearchPage {
    pub products: Vec<CatalogProduct>,
}

/// Paginated product catalog search.
#[async_trait]
pub trait ProductSearchClient: Send + Sync {
    async fn search(
        &self,
        term: &str,
        offset: u32,
        limit: u32,
    ) -> Result<ProductSearchPage, ClientError>;
}

/// A customer record from the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: CustomerId,
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
}

impl CustomerRecord {
    /// A draft update that prefills customer fields from this record.
    pub fn as_update(&self) -> CustomerUpdate {
        CustomerUpdate {
            customer_id: Some(self.customer_id.clone()),
            name: Some(self.name.clone()),
            age: Some(self.age.clone()),
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
            gender: Some(self.gender.clone()),
        }
    }
}

/// One page of customer directory results.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerSearchPage {
    pub customers: Vec<CustomerRecord>,
    pub success: bool,
}

/// A saved address for a directory customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAddress {
    pub address_id: AddressId,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub landmark: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
    #[serde(default)]
    pub address_type: AddressType,
}

impl SavedAddress {
    /// A draft update that auto-fills shipping fields from this address.
    pub fn as_update(&self) -> ShippingUpdate {
        ShippingUpdate {
            address_line1: Some(self.address_line1.clone()),
            address_line2: Some(self.address_line2.clone()),
            landmark: Some(self.landmark.clone()),
            city: Some(self.city.clone()),
            state: Some(self.state.clone()),
            pincode: Some(self.pincode.clone()),
            country: Some(self.country.clone()),
            address_type: Some(self.address_type),
        }
    }
}

/// Customer directory lookup.
#[async_trait]
pub trait CustomerDirectoryClient: Send + Sync {
    async fn search(
        &self,
        term: &str,
        offset: u32,
        limit: u32,
    ) -> Result<CustomerSearchPage, ClientError>;

    async fn addresses(&self, customer_id: &CustomerId) -> Result<Vec<SavedAddress>, ClientError>;
}

/// A file upload request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    pub bucket: String,
    pub folder: String,
    pub file_name: String,
    pub base64_content: String,
}

/// A file upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}

/// File storage for prescription images.
#[async_trait]
pub trait FileUploadClient: Send + Sync {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, ClientError>;
}

/// A courier serviceability request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceabilityRequest {
    pub pickup_postcode: String,
    pub delivery_postcode: String,
    pub cod: u8,
    pub weight: u32,
}

impl ServiceabilityRequest {
    /// Build the request the workflow sends: COD flag and unit weight
    /// are fixed, only the postcodes vary.
    pub fn new(pickup_postcode: impl Into<String>, delivery_postcode: impl Into<String>) -> Self {
        Self {
            pickup_postcode: pickup_postcode.into(),
            delivery_postcode: delivery_postcode.into(),
            cod: 1,
            weight: 1,
        }
    }
}

/// A courier company able to serve a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierCompany {
    pub courier_company_id: i64,
    pub courier_name: String,
}

/// A courier serviceability response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceabilityResponse {
    pub status: i64,
    pub available_courier_companies: Vec<CourierCompany>,
}

impl ServiceabilityResponse {
    /// At least one courier can deliver to the destination.
    pub fn is_serviceable(&self) -> bool {
        !self.available_courier_companies.is_empty()
    }
}

/// Courier serviceability check.
#[async_trait]
pub trait ServiceabilityClient: Send + Sync {
    async fn check(
        &self,
        request: &ServiceabilityRequest,
    ) -> Result<ServiceabilityResponse, ClientError>;
}

/// Receipt returned by a successful order submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub order_id: OrderId,
    #[serde(default)]
    pub shipment_id: Option<i64>,
}

/// Order creation endpoint, in two regional variants.
#[async_trait]
pub trait OrderSubmissionClient: Send + Sync {
    async fn submit(
        &self,
        variant: SubmissionVariant,
        payload: &OrderPayload,
    ) -> Result<SubmissionReceipt, ClientError>;
}
