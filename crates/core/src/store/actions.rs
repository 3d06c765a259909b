//! Reducer actions
//!
//! Every state transition the store supports. The enum is closed, so the
//! reducer is total by construction: there is no "unknown action" path at
//! runtime.

use miniseller_domain::{Lead, Opportunity, StatusFilter};

/// A discrete state transition request.
#[derive(Debug, Clone)]
pub enum Action {
    /// Initial fetch started; clears any prior error.
    LoadingStarted,
    /// Initial fetch finished; replaces the lead collection wholesale.
    LeadsLoaded(Vec<Lead>),
    /// Upsert a single lead by id.
    LeadUpdated(Lead),
    /// Commit a successful conversion: replace the lead, append the
    /// opportunity.
    LeadConverted { lead: Lead, opportunity: Opportunity },
    /// Search query edited.
    SearchChanged(String),
    /// Status filter changed.
    FilterChanged(StatusFilter),
    /// Score sorting toggled.
    SortChanged(bool),
    /// Detail panel opened with a value snapshot of the lead.
    DetailPanelOpened(Lead),
    /// Detail panel closed; selection cleared.
    DetailPanelClosed,
    /// Load-lifecycle error surfaced; implies not loading.
    ErrorSet(String),
    /// Load-lifecycle error dismissed.
    ErrorCleared,
}

impl Action {
    /// Stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadingStarted => "loading_started",
            Self::LeadsLoaded(_) => "leads_loaded",
            Self::LeadUpdated(_) => "lead_updated",
            Self::LeadConverted { .. } => "lead_converted",
            Self::SearchChanged(_) => "search_changed",
            Self::FilterChanged(_) => "filter_changed",
            Self::SortChanged(_) => "sort_changed",
            Self::DetailPanelOpened(_) => "detail_panel_opened",
            Self::DetailPanelClosed => "detail_panel_closed",
            Self::ErrorSet(_) => "error_set",
            Self::ErrorCleared => "error_cleared",
        }
    }
}
