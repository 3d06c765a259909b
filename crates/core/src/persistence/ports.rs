//! Port interface for durable local storage
//!
//! Two independent slices, each stored under its own key as serialized JSON.
//! The trait is synchronous: writes happen on the dispatching thread and are
//! small enough that blocking is acceptable at this scale.

use miniseller_domain::{Opportunity, Result, UiPreferences};

/// Trait for the durable key/value storage backing the two persisted slices.
pub trait PreferencesStore: Send + Sync {
    /// Read the persisted UI preferences. `Ok(None)` when nothing was ever
    /// written; an error when the stored value is unreadable or malformed.
    fn load_preferences(&self) -> Result<Option<UiPreferences>>;

    /// Write the UI preference slice.
    fn save_preferences(&self, preferences: &UiPreferences) -> Result<()>;

    /// Read the persisted opportunity list.
    fn load_opportunities(&self) -> Result<Option<Vec<Opportunity>>>;

    /// Write the full opportunity list.
    fn save_opportunities(&self, opportunities: &[Opportunity]) -> Result<()>;
}
