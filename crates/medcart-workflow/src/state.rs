//! Workflow state machine states.

use medcart_commerce::validate::DraftTab;
use serde::{Deserialize, Serialize};

/// State of an order-creation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowState {
    /// User is editing one of the four tabs.
    Editing(DraftTab),
    /// An order submission is in flight.
    Submitting,
    /// The order was created and the draft reset.
    Success,
    /// The last submission attempt failed; the draft is preserved and
    /// the items tab is active so the user can retry.
    Failed,
}

impl WorkflowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Editing(_) => "editing",
            WorkflowState::Submitting => "submitting",
            WorkflowState::Success => "success",
            WorkflowState::Failed => "failed",
        }
    }

    /// The tab the user is on, if any. A failed submission parks the
    /// user on the items tab.
    pub fn active_tab(&self) -> Option<DraftTab> {
        match self {
            WorkflowState::Editing(tab) => Some(*tab),
            WorkflowState::Failed => Some(DraftTab::Items),
            _ => None,
        }
    }
}

impl Default for WorkflowState {
    fn default() -> Self {
        WorkflowState::Editing(DraftTab::Customer)
    }
}
