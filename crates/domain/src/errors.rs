//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the Mini Seller Console.
///
/// Variant messages are user-facing: they are displayed verbatim in banners
/// and notifications, so `Display` carries no variant prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SellerError {
    /// Initial lead fetch failed. Fatal to first render; the caller shows a
    /// full-page retry screen and does not retry automatically.
    #[error("{0}")]
    Load(String),

    /// Simulated save round trip failed. Transient; recovered by rolling the
    /// optimistic update back.
    #[error("{0}")]
    Save(String),

    /// Simulated conversion round trip failed. Transient; conversion is not
    /// optimistic, so no rollback is needed.
    #[error("{0}")]
    Convert(String),

    /// Local input validation failed. Pre-empts any gateway call.
    #[error("{0}")]
    Validation(String),

    /// Durable storage read/write failed. Always swallowed with a warning,
    /// never surfaced to the user.
    #[error("{0}")]
    Persistence(String),

    /// Configuration error at startup.
    #[error("{0}")]
    Config(String),
}

/// Result type alias for Mini Seller operations
pub type Result<T> = std::result::Result<T, SellerError>;
