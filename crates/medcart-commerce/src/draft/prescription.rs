//! Prescription attachments.

use serde::{Deserialize, Serialize};

/// Prescription state for an order draft.
///
/// URLs come back from the upload collaborator and are only ever
/// appended or removed by index, never edited in place. A draft with
/// `prescription_items` set and no URLs is still submittable; blocking
/// there would be a product decision, not a validator one.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PrescriptionState {
    /// Whether the order contains prescription-required items.
    pub prescription_items: bool,
    /// Uploaded prescription image URLs.
    pub urls: Vec<String>,
}

impl PrescriptionState {
    /// Append an uploaded URL.
    pub fn push_url(&mut self, url: impl Into<String>) {
        self.urls.push(url.into());
    }

    /// Remove a URL by index. Out-of-range indexes are a no-op.
    pub fn remove_url(&mut self, index: usize) -> Option<String> {
        if index < self.urls.len() {
            Some(self.urls.remove(index))
        } else {
            None
        }
    }

    /// First attached URL, the one the order payload carries.
    pub fn primary_url(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_remove() {
        let mut prescription = PrescriptionState::default();
        prescription.push_url("https://cdn.example.com/rx/1.jpg");
        prescription.push_url("https://cdn.example.com/rx/2.jpg");

        assert_eq!(prescription.primary_url(), Some("https://cdn.example.com/rx/1.jpg"));
        assert_eq!(
            prescription.remove_url(0),
            Some("https://cdn.example.com/rx/1.jpg".to_string())
        );
        assert_eq!(prescription.primary_url(), Some("https://cdn.example.com/rx/2.jpg"));
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut prescription = PrescriptionState::default();
        prescription.push_url("https://cdn.example.com/rx/1.jpg");
        assert_eq!(prescription.remove_url(5), None);
        assert_eq!(prescription.urls.len(), 1);
    }
}
