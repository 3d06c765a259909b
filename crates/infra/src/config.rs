//! Application configuration
//!
//! Loads runtime settings from environment variables with documented
//! defaults.
//!
//! ## Environment Variables
//! - `MINISELLER_DATA_DIR`: directory for the persisted JSON slices
//! - `MINISELLER_LEADS_PATH`: path to the seed leads JSON file
//! - `MINISELLER_SAVE_DELAY_MS`: simulated round-trip latency in ms
//! - `MINISELLER_FAILURE_RATE`: simulated failure probability in `[0, 1]`

use std::path::PathBuf;

use miniseller_domain::constants::{FAILURE_RATE, NETWORK_SAVE_DELAY_MS};
use miniseller_domain::{Result, SellerError};

/// Runtime configuration for the console.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the persisted JSON slices.
    pub data_dir: PathBuf,
    /// Seed dataset location.
    pub leads_path: PathBuf,
    /// Simulated round-trip latency in milliseconds.
    pub save_delay_ms: u64,
    /// Simulated failure probability in `[0, 1]`.
    pub failure_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            leads_path: PathBuf::from("data/leads.json"),
            save_delay_ms: NETWORK_SAVE_DELAY_MS,
            failure_rate: FAILURE_RATE,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// # Errors
    /// Returns [`SellerError::Config`] when a numeric variable is present
    /// but unparseable.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("MINISELLER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(path) = std::env::var("MINISELLER_LEADS_PATH") {
            config.leads_path = PathBuf::from(path);
        }
        if let Ok(raw) = std::env::var("MINISELLER_SAVE_DELAY_MS") {
            config.save_delay_ms = raw
                .parse()
                .map_err(|err| SellerError::Config(format!("Invalid save delay: {err}")))?;
        }
        if let Ok(raw) = std::env::var("MINISELLER_FAILURE_RATE") {
            let rate: f64 = raw
                .parse()
                .map_err(|err| SellerError::Config(format!("Invalid failure rate: {err}")))?;
            if !(0.0..=1.0).contains(&rate) {
                return Err(SellerError::Config(format!(
                    "Invalid failure rate: {rate} is not in [0, 1]"
                )));
            }
            config.failure_rate = rate;
        }

        Ok(config)
    }
}
