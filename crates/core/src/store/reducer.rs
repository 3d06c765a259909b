//! Pure state transition function
//!
//! `(state, action) -> state` with no side effects, no async, and no failure
//! path. The store applies it under a write lock; nothing else may mutate
//! state.

use miniseller_domain::{AppState, Lead, LeadStatus};

use super::actions::Action;

/// Apply one action to the current state and produce the next state.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    match action {
        Action::LoadingStarted => {
            AppState { is_loading: true, error: None, ..state.clone() }
        }

        Action::LeadsLoaded(leads) => {
            // Reconcile against persisted opportunities: a lead that already
            // has an opportunity is always displayed as Converted, whatever
            // the seed data says.
            let reconciled = leads
                .iter()
                .map(|lead| {
                    if state.has_opportunity_for(&lead.id) {
                        Lead { status: LeadStatus::Converted, ..lead.clone() }
                    } else {
                        lead.clone()
                    }
                })
                .collect();
            AppState { leads: reconciled, is_loading: false, error: None, ..state.clone() }
        }

        Action::LeadUpdated(lead) => {
            let mut next = state.clone();
            match next.leads.iter_mut().find(|existing| existing.id == lead.id) {
                Some(existing) => *existing = lead.clone(),
                None => next.leads.push(lead.clone()),
            }
            if next.selected_lead.as_ref().is_some_and(|selected| selected.id == lead.id) {
                next.selected_lead = Some(lead.clone());
            }
            next
        }

        Action::LeadConverted { lead, opportunity } => {
            let mut next = state.clone();
            if let Some(existing) = next.leads.iter_mut().find(|existing| existing.id == lead.id) {
                *existing = lead.clone();
            }
            next.opportunities.push(opportunity.clone());
            if next.selected_lead.as_ref().is_some_and(|selected| selected.id == lead.id) {
                next.selected_lead = Some(lead.clone());
            }
            next
        }

        Action::SearchChanged(query) => {
            AppState { search_query: query.clone(), ..state.clone() }
        }

        Action::FilterChanged(filter) => AppState { status_filter: *filter, ..state.clone() },

        Action::SortChanged(sort_by_score) => {
            AppState { sort_by_score: *sort_by_score, ..state.clone() }
        }

        Action::DetailPanelOpened(lead) => AppState {
            selected_lead: Some(lead.clone()),
            is_detail_panel_open: true,
            ..state.clone()
        },

        Action::DetailPanelClosed => {
            AppState { selected_lead: None, is_detail_panel_open: false, ..state.clone() }
        }

        Action::ErrorSet(message) => {
            AppState { error: Some(message.clone()), is_loading: false, ..state.clone() }
        }

        Action::ErrorCleared => AppState { error: None, ..state.clone() },
    }
}
