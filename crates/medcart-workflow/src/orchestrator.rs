//! The place-order workflow orchestrator.
//!
//! Sequences tab validation, the external serviceability check, payload
//! construction, and order submission. This is the only place in the
//! system with failure branching: every external-call failure is caught
//! here and surfaced as a [`WorkflowError`] value, never as a panic.

use crate::clients::{
    CustomerRecord, OrderSubmissionClient, SavedAddress, ServiceabilityClient,
    ServiceabilityRequest, SubmissionReceipt,
};
use crate::config::WorkflowConfig;
use crate::error::WorkflowError;
use crate::payload::OrderPayload;
use crate::routing::variant_for;
use crate::state::WorkflowState;
use medcart_commerce::draft::OrderDraft;
use medcart_commerce::items::calculate_charges;
use medcart_commerce::validate::DraftTab;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// One order-creation session.
///
/// Owns the draft for its lifetime; multiple workflows (e.g. several
/// open sessions in tests) never share state. Clients are injected so
/// the submission path can be driven against mocks.
pub struct PlaceOrderWorkflow<S, O> {
    draft: OrderDraft,
    config: WorkflowConfig,
    state: WorkflowState,
    last_error: Option<String>,
    serviceability: S,
    submission: O,
}

impl<S, O> PlaceOrderWorkflow<S, O>
where
    S: ServiceabilityClient,
    O: OrderSubmissionClient,
{
    /// Create a workflow with an empty draft, starting on the customer tab.
    pub fn new(config: WorkflowConfig, serviceability: S, submission: O) -> Self {
        Self {
            draft: OrderDraft::new(),
            config,
            state: WorkflowState::default(),
            last_error: None,
            serviceability,
            submission,
        }
    }

    /// The draft being edited.
    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Mutable access to the draft for field edits.
    pub fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    /// Current workflow state.
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// The tab the user is on, if editing.
    pub fn active_tab(&self) -> Option<DraftTab> {
        self.state.active_tab()
    }

    /// Message from the last failed submission, until the next attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Prefill customer fields from a directory match.
    pub fn select_customer(&mut self, record: &CustomerRecord) {
        self.draft.update_customer(record.as_update());
    }

    /// Auto-fill shipping fields from a saved address. Later manual
    /// edits win field-by-field.
    pub fn apply_saved_address(&mut self, address: &SavedAddress) {
        self.draft.update_shipping(address.as_update());
    }

    /// Advance to the next tab.
    ///
    /// Runs the active tab's validator first; on failure the workflow
    /// stays put and the error list is returned.
    pub fn next(&mut self) -> Result<DraftTab, WorkflowError> {
        let tab = match self.state {
            WorkflowState::Editing(tab) => tab,
            _ => {
                return Err(WorkflowError::InvalidTransition {
                    from: self.state.as_str().to_string(),
                })
            }
        };

        if !self.draft.validate_tab(tab) {
            return Err(WorkflowError::Validation(
                self.draft.validation_errors.for_tab(tab).to_vec(),
            ));
        }

        match tab.next() {
            Some(next) => {
                debug!(from = tab.as_str(), to = next.as_str(), "tab advanced");
                self.state = WorkflowState::Editing(next);
                Ok(next)
            }
            None => Err(WorkflowError::InvalidTransition {
                from: tab.as_str().to_string(),
            }),
        }
    }

    /// Step back to the previous tab. No validation on the way back.
    pub fn back(&mut self) -> Result<DraftTab, WorkflowError> {
        let tab = match self.state {
            WorkflowState::Editing(tab) => tab,
            _ => {
                return Err(WorkflowError::InvalidTransition {
                    from: self.state.as_str().to_string(),
                })
            }
        };

        match tab.previous() {
            Some(previous) => {
                self.state = WorkflowState::Editing(previous);
                Ok(previous)
            }
            None => Err(WorkflowError::InvalidTransition {
                from: tab.as_str().to_string(),
            }),
        }
    }

    /// Submit the order.
    ///
    /// Only allowed from the items tab (or the failed-retry position,
    /// which parks the user there); reaching it means every earlier tab
    /// already validated on the way through [`Self::next`]. Further
    /// gated on the items tab validating and the draft having items;
    /// neither collaborator is called otherwise. On success the draft is
    /// reset. On any failure the draft is preserved so the user can
    /// retry without re-entering data; no automatic retry is performed.
    pub async fn submit(&mut self) -> Result<SubmissionReceipt, WorkflowError> {
        match self.state {
            WorkflowState::Submitting => return Err(WorkflowError::SubmissionInFlight),
            WorkflowState::Editing(DraftTab::Items) | WorkflowState::Failed => {}
            WorkflowState::Editing(tab) => {
                return Err(WorkflowError::InvalidTransition {
                    from: tab.as_str().to_string(),
                })
            }
            WorkflowState::Success => {
                return Err(WorkflowError::InvalidTransition {
                    from: self.state.as_str().to_string(),
                })
            }
        }

        if !self.draft.validate_tab(DraftTab::Items) {
            self.state = WorkflowState::Editing(DraftTab::Items);
            return Err(WorkflowError::Validation(
                self.draft.validation_errors.items.clone(),
            ));
        }
        if self.draft.items.is_empty() {
            self.state = WorkflowState::Editing(DraftTab::Items);
            return Err(WorkflowError::EmptyOrder);
        }

        self.state = WorkflowState::Submitting;
        self.last_error = None;

        match self.run_submission().await {
            Ok(receipt) => {
                info!(order_id = %receipt.order_id, "order created");
                self.draft.reset();
                self.state = WorkflowState::Success;
                Ok(receipt)
            }
            Err(err) => {
                warn!(error = %err, "order submission failed");
                self.last_error = Some(err.to_string());
                self.state = WorkflowState::Failed;
                Err(err)
            }
        }
    }

    async fn run_submission(&self) -> Result<SubmissionReceipt, WorkflowError> {
        let charges = calculate_charges(&self.draft.items)?;

        let request = ServiceabilityRequest::new(
            self.config.pickup_postcode.clone(),
            self.draft.shipping.pincode.clone(),
        );
        debug!(delivery = %request.delivery_postcode, "checking serviceability");
        let response = timeout(self.config.call_timeout(), self.serviceability.check(&request))
            .await
            .map_err(|_| WorkflowError::Timeout)??;
        if !response.is_serviceable() {
            return Err(WorkflowError::ServiceUnavailable);
        }

        let payload = OrderPayload::from_draft(&self.draft, &charges);
        let variant = variant_for(&self.draft.shipping.pincode, &self.draft.shipping.city);
        debug!(
            variant = variant.as_str(),
            total = payload.total,
            "submitting order"
        );
        let receipt = timeout(
            self.config.call_timeout(),
            self.submission.submit(variant, &payload),
        )
        .await
        .map_err(|_| WorkflowError::Timeout)??;

        Ok(receipt)
    }

    /// Abandon the session. Always discards the draft; there is no
    /// draft persistence across closes.
    ///
    /// Infallible: a live [`Self::submit`] future borrows the workflow
    /// mutably, so by the time `cancel` can run any in-flight attempt
    /// has been dropped. Cancelling from [`WorkflowState::Submitting`]
    /// is therefore the recovery path for an abandoned submission.
    pub fn cancel(&mut self) {
        self.draft.reset();
        self.last_error = None;
        self.state = WorkflowState::default();
    }
}
