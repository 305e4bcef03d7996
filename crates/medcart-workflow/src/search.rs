//! Product search with last-response-wins sequencing.
//!
//! Search input is debounced upstream (see
//! [`crate::config::WorkflowConfig::search_debounce_ms`]), but in-flight
//! requests can still race. Every request takes a ticket from a
//! monotonically increasing generation counter and only the response
//! holding the latest ticket may update the visible results; stale
//! responses are dropped.

use crate::clients::{ClientError, ProductSearchClient};
use medcart_commerce::items::CatalogProduct;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::debug;

/// One product-search box for one order-creation session.
pub struct SearchSession<C> {
    client: C,
    generation: AtomicU64,
    visible: Mutex<Vec<CatalogProduct>>,
}

impl<C: ProductSearchClient> SearchSession<C> {
    /// Create a session with an empty result list.
    pub fn new(client: C) -> Self {
        Self {
            client,
            generation: AtomicU64::new(0),
            visible: Mutex::new(Vec::new()),
        }
    }

    /// Run a search and, if no newer search has started meanwhile,
    /// publish its results.
    ///
    /// Returns `Ok(true)` if the results were published, `Ok(false)` if
    /// they were stale and dropped.
    pub async fn search(&self, term: &str, offset: u32, limit: u32) -> Result<bool, ClientError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let page = self.client.search(term, offset, limit).await?;
        Ok(self.publish(ticket, page.products))
    }

    fn publish(&self, ticket: u64, products: Vec<CatalogProduct>) -> bool {
        if ticket != self.generation.load(Ordering::SeqCst) {
            debug!(ticket, "dropping stale search response");
            return false;
        }
        *self.visible.lock().expect("search results lock") = products;
        true
    }

    /// The currently visible result list.
    pub fn visible(&self) -> Vec<CatalogProduct> {
        self.visible.lock().expect("search results lock").clone()
    }
}
