//! Lead save/convert orchestration - core business logic

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use miniseller_domain::{Lead, LeadStatus, Result};
use tracing::warn;

use super::ports::{Conversion, LeadGateway};
use crate::store::{Action, AppStore};
use crate::utils::validation::validate_email;

/// Why a convert request was refused without touching the gateway.
///
/// A blocked conversion is a no-op, not an error: no dispatch happens and
/// nothing is rolled back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertBlock {
    /// The lead is not in the Qualified status.
    NotQualified { current: LeadStatus },
    /// An opportunity already references this lead.
    AlreadyConverted,
}

impl fmt::Display for ConvertBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotQualified { current } => write!(
                f,
                "Lead must be \"Qualified\" before conversion to opportunity. Current status: {current}"
            ),
            Self::AlreadyConverted => {
                f.write_str("This lead has already been converted to an opportunity")
            }
        }
    }
}

/// Result of a convert flow that did not fail at the gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertOutcome {
    /// The conversion went through and was committed to the store.
    Converted(Conversion),
    /// A precondition failed; nothing was dispatched or sent.
    Blocked(ConvertBlock),
}

/// Result of the local status-change side channel.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    /// The lead as committed to the store.
    pub lead: Lead,
    /// Set when the lead moved away from Converted even though it already
    /// has a recorded opportunity. A warning for the user, never a block.
    pub warned_prior_conversion: bool,
}

/// Orchestrates gateway calls and store dispatches for the lead flows.
///
/// The `saving`/`converting` flags are admission control only: callers must
/// refuse to start an overlapping operation of the same kind while the
/// matching flag is true. The service does not enforce mutual exclusion
/// beyond exposing the flags, and provides no cancellation - a flow
/// superseded by panel closure still completes and applies its update.
pub struct LeadsService {
    store: Arc<AppStore>,
    gateway: Arc<dyn LeadGateway>,
    saving: AtomicBool,
    converting: AtomicBool,
}

impl LeadsService {
    /// Create a new service over the shared store and gateway.
    pub fn new(store: Arc<AppStore>, gateway: Arc<dyn LeadGateway>) -> Self {
        Self { store, gateway, saving: AtomicBool::new(false), converting: AtomicBool::new(false) }
    }

    /// Whether a save round trip is in flight.
    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::SeqCst)
    }

    /// Whether a convert round trip is in flight.
    pub fn is_converting(&self) -> bool {
        self.converting.load(Ordering::SeqCst)
    }

    /// Whether any opportunity already references the given lead.
    pub fn has_opportunity_for(&self, lead_id: &str) -> bool {
        self.store.has_opportunity_for(lead_id)
    }

    /// Load the initial dataset.
    ///
    /// Dispatches `LoadingStarted` up front; on failure the error message is
    /// committed to state (`ErrorSet`) and returned so the caller can show
    /// the full-page retry screen.
    pub async fn load_leads(&self) -> Result<()> {
        self.store.dispatch(Action::LoadingStarted);
        match self.gateway.fetch_leads().await {
            Ok(leads) => {
                self.store.dispatch(Action::LeadsLoaded(leads));
                Ok(())
            }
            Err(err) => {
                self.store.dispatch(Action::ErrorSet(err.to_string()));
                Err(err)
            }
        }
    }

    /// Save an edited lead with an optimistic update.
    ///
    /// Validation runs first and blocks the whole flow - no dispatch, no
    /// gateway call. The edit is then committed optimistically, confirmed on
    /// success, and rolled back to the pre-edit snapshot on failure. The
    /// error is returned so the calling UI can keep the edit panel open.
    pub async fn save_lead(&self, edited: Lead) -> Result<Lead> {
        validate_email(&edited.email)?;

        let snapshot = self.store.lead_by_id(&edited.id);
        self.saving.store(true, Ordering::SeqCst);
        self.store.dispatch(Action::LeadUpdated(edited.clone()));

        let result = self.gateway.update_lead(&edited).await;
        self.saving.store(false, Ordering::SeqCst);

        match result {
            Ok(confirmed) => {
                self.store.dispatch(Action::LeadUpdated(confirmed.clone()));
                Ok(confirmed)
            }
            Err(err) => {
                if let Some(original) = snapshot {
                    self.store.dispatch(Action::LeadUpdated(original));
                }
                warn!(lead_id = %edited.id, error = %err, "lead save failed, optimistic update rolled back");
                Err(err)
            }
        }
    }

    /// Convert a qualified lead into an opportunity.
    ///
    /// Preconditions: status must be exactly Qualified and no opportunity
    /// may already reference the lead. A violated precondition returns
    /// [`ConvertOutcome::Blocked`] without any dispatch or gateway call.
    /// There is no optimistic update: a gateway failure leaves state
    /// untouched.
    ///
    /// The precondition check and the opportunity append are not
    /// transactional; two racing convert flows can both pass the check.
    pub async fn convert_lead(&self, lead: &Lead, amount: Option<f64>) -> Result<ConvertOutcome> {
        if lead.status != LeadStatus::Qualified {
            return Ok(ConvertOutcome::Blocked(ConvertBlock::NotQualified {
                current: lead.status,
            }));
        }
        if self.store.has_opportunity_for(&lead.id) {
            return Ok(ConvertOutcome::Blocked(ConvertBlock::AlreadyConverted));
        }

        self.converting.store(true, Ordering::SeqCst);
        let result = self.gateway.convert_lead(lead, amount).await;
        self.converting.store(false, Ordering::SeqCst);

        let conversion = result?;
        self.store.dispatch(Action::LeadConverted {
            lead: conversion.lead.clone(),
            opportunity: conversion.opportunity.clone(),
        });
        Ok(ConvertOutcome::Converted(conversion))
    }

    /// Change a lead's status locally, without a gateway round trip.
    ///
    /// Moving a Converted lead to another status is allowed but flagged so
    /// the UI can warn that a historical opportunity remains on record.
    pub fn change_status(&self, lead: &Lead, new_status: LeadStatus) -> StatusChange {
        let warned =
            lead.status == LeadStatus::Converted && new_status != LeadStatus::Converted;
        if warned {
            warn!(lead_id = %lead.id, %new_status, "status moved away from Converted on a lead with a recorded opportunity");
        }

        let updated = Lead { status: new_status, ..lead.clone() };
        self.store.dispatch(Action::LeadUpdated(updated.clone()));
        StatusChange { lead: updated, warned_prior_conversion: warned }
    }
}
