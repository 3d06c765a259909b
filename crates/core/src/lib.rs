//! # Mini Seller Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The application state store and its pure reducer
//! - Port/adapter interfaces (traits)
//! - Save/convert orchestration and persistence sync
//! - View projection and input validation
//!
//! ## Architecture Principles
//! - Only depends on `miniseller-domain`
//! - No file, network, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod leads;
pub mod persistence;
pub mod projection;
pub mod store;
pub mod utils;

// Re-export specific items to avoid ambiguity
pub use leads::ports::{Conversion, LeadGateway};
pub use leads::{ConvertBlock, ConvertOutcome, LeadsService, StatusChange};
pub use persistence::ports::PreferencesStore;
pub use persistence::PersistenceSync;
pub use projection::visible_leads;
pub use store::{reduce, Action, AppStore};
// Re-export utilities
pub use utils::currency::{format_currency, parse_currency};
pub use utils::validation::{validate_amount, validate_email};
