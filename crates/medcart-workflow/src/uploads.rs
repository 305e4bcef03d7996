//! Prescription image uploads.

use crate::clients::{FileUploadClient, UploadRequest};
use crate::config::WorkflowConfig;
use crate::error::WorkflowError;
use medcart_commerce::draft::OrderDraft;
use tracing::debug;

/// Uploads prescription images and attaches the resulting URLs to a
/// draft. A failed upload is reported and touches nothing else; the
/// other tabs are unaffected.
pub struct PrescriptionUploader<U> {
    client: U,
    bucket: String,
    folder: String,
}

impl<U: FileUploadClient> PrescriptionUploader<U> {
    /// Create an uploader targeting the configured bucket and folder.
    pub fn new(config: &WorkflowConfig, client: U) -> Self {
        Self {
            client,
            bucket: config.upload_bucket.clone(),
            folder: config.upload_folder.clone(),
        }
    }

    /// Upload a base64-encoded image and append its URL to the draft.
    ///
    /// Returns the stored URL on success.
    pub async fn upload_and_attach(
        &self,
        draft: &mut OrderDraft,
        file_name: &str,
        base64_content: &str,
    ) -> Result<String, WorkflowError> {
        let request = UploadRequest {
            bucket: self.bucket.clone(),
            folder: self.folder.clone(),
            file_name: file_name.to_string(),
            base64_content: base64_content.to_string(),
        };
        let response = self.client.upload(&request).await?;
        if !response.success {
            return Err(WorkflowError::UploadFailed(file_name.to_string()));
        }
        debug!(url = %response.url, "prescription attached");
        draft.push_prescription_url(&response.url);
        Ok(response.url)
    }
}
