//! Lead orchestration
//!
//! Sequences gateway calls with store dispatches: the optimistic save flow
//! with rollback, the precondition-gated convert flow, and the local
//! status-change side channel.

pub mod ports;
mod service;

pub use service::{ConvertBlock, ConvertOutcome, LeadsService, StatusChange};
