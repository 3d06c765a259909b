//! Port interfaces for the remote data gateway
//!
//! These traits define the boundary between core orchestration and the
//! (simulated) network infrastructure.

use async_trait::async_trait;
use miniseller_domain::{Lead, Opportunity, Result};

/// A successful conversion round trip: the lead as confirmed by the server
/// and the freshly minted opportunity.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub lead: Lead,
    pub opportunity: Opportunity,
}

/// Trait for the remote lead data source.
#[async_trait]
pub trait LeadGateway: Send + Sync {
    /// Load the initial lead dataset.
    ///
    /// Fails with [`miniseller_domain::SellerError::Load`] when the resource
    /// is unreachable or malformed. The caller surfaces the error and does
    /// not retry automatically.
    async fn fetch_leads(&self) -> Result<Vec<Lead>>;

    /// Persist an edited lead.
    ///
    /// On success echoes the server-confirmed value (no transformation in
    /// the simulation). Fails with `Save` on the simulated failure path.
    async fn update_lead(&self, lead: &Lead) -> Result<Lead>;

    /// Convert a lead into an opportunity.
    ///
    /// On success returns the lead with status forced to Converted plus an
    /// opportunity whose id is unique per call. `amount` is carried through
    /// as given. Fails with `Convert` on the simulated failure path.
    async fn convert_lead(&self, lead: &Lead, amount: Option<f64>) -> Result<Conversion>;
}
