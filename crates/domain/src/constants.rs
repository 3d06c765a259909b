//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Simulated network configuration
pub const NETWORK_SAVE_DELAY_MS: u64 = 500;
pub const FAILURE_RATE: f64 = 0.05;

// Durable storage keys
pub const UI_PREFERENCES_KEY: &str = "mini-seller-ui-preferences";
pub const OPPORTUNITIES_KEY: &str = "mini-seller-opportunities";

// Input bounds (enforced by widgets/validation, not by the model)
pub const MAX_OPPORTUNITY_AMOUNT: f64 = 10_000_000.0;
pub const MAX_LEAD_SCORE: i32 = 100;
