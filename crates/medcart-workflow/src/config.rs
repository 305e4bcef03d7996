//! Workflow configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for an order-creation workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Fixed origin pincode used for serviceability checks.
    #[serde(default = "default_pickup_postcode")]
    pub pickup_postcode: String,
    /// Timeout for each external call, in milliseconds.
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,
    /// Debounce interval for product search input, in milliseconds.
    /// Consumed by the UI layer; recorded here so it is configured in
    /// one place.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Storage bucket for prescription uploads.
    #[serde(default = "default_upload_bucket")]
    pub upload_bucket: String,
    /// Storage folder for prescription uploads.
    #[serde(default = "default_upload_folder")]
    pub upload_folder: String,
}

fn default_pickup_postcode() -> String {
    "110001".to_string()
}

fn default_call_timeout_ms() -> u64 {
    10_000
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_upload_bucket() -> String {
    "medcart-uploads".to_string()
}

fn default_upload_folder() -> String {
    "prescriptions".to_string()
}

impl WorkflowConfig {
    /// Per-call timeout as a `Duration`.
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            pickup_postcode: default_pickup_postcode(),
            call_timeout_ms: default_call_timeout_ms(),
            search_debounce_ms: default_search_debounce_ms(),
            upload_bucket: default_upload_bucket(),
            upload_folder: default_upload_folder(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorkflowConfig::default();
        assert_eq!(config.call_timeout(), Duration::from_secs(10));
        assert_eq!(config.search_debounce_ms, 500);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: WorkflowConfig =
            serde_json::from_str(r#"{"pickup_postcode": "560001"}"#).unwrap();
        assert_eq!(config.pickup_postcode, "560001");
        assert_eq!(config.call_timeout_ms, 10_000);
    }
}
