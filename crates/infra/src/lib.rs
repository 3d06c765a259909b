//! # Mini Seller Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The simulated remote data gateway (latency + random failure injection)
//! - JSON-file persistence for the two durable slices
//! - Configuration loading and the application bootstrap
//!
//! ## Architecture
//! - Implements traits defined in `miniseller-core`
//! - Contains all "impure" code (file I/O, clocks, randomness)

pub mod bootstrap;
pub mod config;
pub mod gateway;
pub mod persistence;

// Re-export commonly used items
pub use bootstrap::AppContext;
pub use config::AppConfig;
pub use gateway::{GatewayConfig, SimulatedLeadGateway};
pub use persistence::JsonFileStore;
