//! # Mini Seller Domain
//!
//! Business domain types and models for the Mini Seller Console.
//!
//! This crate contains:
//! - Domain data types (Lead, Opportunity, AppState)
//! - Domain error types and Result definitions
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Mini Seller crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
