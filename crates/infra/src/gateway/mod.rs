//! Simulated remote data gateway
//!
//! Stands in for a real backend: reads the seed dataset from a JSON file and
//! simulates save/convert round trips with fixed latency and a random
//! failure rate. The failure rate is reproducible in distribution only;
//! tests pin it to 0.0 or 1.0 for determinism.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use miniseller_core::leads::ports::{Conversion, LeadGateway};
use miniseller_domain::constants::{FAILURE_RATE, NETWORK_SAVE_DELAY_MS};
use miniseller_domain::{Lead, LeadStatus, Opportunity, Result, SellerError};
use rand::Rng;
use tracing::debug;

/// Tunables for the simulation. Defaults match the documented behavior:
/// 500 ms latency, 5% long-run failure rate.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Path to the static JSON resource with the seed leads.
    pub leads_path: PathBuf,
    /// Simulated round-trip latency for update/convert.
    pub save_delay: Duration,
    /// Probability in `[0, 1]` that an update/convert call fails.
    pub failure_rate: f64,
}

impl GatewayConfig {
    /// Config with documented defaults for the given seed file.
    pub fn new(leads_path: impl Into<PathBuf>) -> Self {
        Self {
            leads_path: leads_path.into(),
            save_delay: Duration::from_millis(NETWORK_SAVE_DELAY_MS),
            failure_rate: FAILURE_RATE,
        }
    }

    /// Override the simulated latency.
    pub fn with_save_delay(mut self, delay: Duration) -> Self {
        self.save_delay = delay;
        self
    }

    /// Override the failure rate.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate;
        self
    }
}

/// File-backed, failure-injecting implementation of [`LeadGateway`].
pub struct SimulatedLeadGateway {
    config: GatewayConfig,
    /// Per-call sequence folded into opportunity ids so repeated conversions
    /// within the same millisecond still mint unique ids.
    sequence: AtomicU64,
}

impl SimulatedLeadGateway {
    /// Create a gateway with the given simulation config.
    pub fn new(config: GatewayConfig) -> Self {
        Self { config, sequence: AtomicU64::new(0) }
    }

    async fn simulate_round_trip(&self) {
        if !self.config.save_delay.is_zero() {
            tokio::time::sleep(self.config.save_delay).await;
        }
    }

    fn should_fail(&self) -> bool {
        self.config.failure_rate > 0.0
            && rand::thread_rng().gen::<f64>() < self.config.failure_rate
    }

    fn mint_opportunity(&self, lead: &Lead, amount: Option<f64>) -> Opportunity {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        Opportunity {
            id: format!("opp-{}-{}-{}", lead.id, Utc::now().timestamp_millis(), sequence),
            lead_id: lead.id.clone(),
            name: lead.name.clone(),
            company: lead.company.clone(),
            amount,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl LeadGateway for SimulatedLeadGateway {
    async fn fetch_leads(&self) -> Result<Vec<Lead>> {
        let raw = std::fs::read_to_string(&self.config.leads_path)
            .map_err(|err| SellerError::Load(format!("Failed to load leads: {err}")))?;
        let leads: Vec<Lead> = serde_json::from_str(&raw)
            .map_err(|err| SellerError::Load(format!("Failed to load leads: {err}")))?;
        debug!(count = leads.len(), path = %self.config.leads_path.display(), "seed leads loaded");
        Ok(leads)
    }

    async fn update_lead(&self, lead: &Lead) -> Result<Lead> {
        self.simulate_round_trip().await;
        if self.should_fail() {
            return Err(SellerError::Save("Failed to save lead. Please try again.".to_string()));
        }
        // The simulation echoes the input unchanged; there is no server-side
        // transformation.
        Ok(lead.clone())
    }

    async fn convert_lead(&self, lead: &Lead, amount: Option<f64>) -> Result<Conversion> {
        self.simulate_round_trip().await;
        if self.should_fail() {
            return Err(SellerError::Convert(
                "Failed to convert lead. Please try again.".to_string(),
            ));
        }

        let converted = Lead { status: LeadStatus::Converted, ..lead.clone() };
        let opportunity = self.mint_opportunity(lead, amount);
        Ok(Conversion { lead: converted, opportunity })
    }
}
