//! Store-to-storage mirroring

use std::sync::Arc;

use miniseller_domain::{AppState, Opportunity, UiPreferences};
use parking_lot::Mutex;
use tracing::warn;

use super::ports::PreferencesStore;
use crate::store::AppStore;

/// Mirrors the two durable slices to storage whenever they change.
///
/// Each slice is written only when it differs from the last successful
/// write. Storage failures are logged and swallowed; they must never block
/// or surface into the main flows.
pub struct PersistenceSync {
    storage: Arc<dyn PreferencesStore>,
    last_preferences: Mutex<Option<UiPreferences>>,
    last_opportunities: Mutex<Option<Vec<Opportunity>>>,
}

impl PersistenceSync {
    /// Create a sync layer over the given storage adapter.
    pub fn new(storage: Arc<dyn PreferencesStore>) -> Arc<Self> {
        Arc::new(Self {
            storage,
            last_preferences: Mutex::new(None),
            last_opportunities: Mutex::new(None),
        })
    }

    /// Read both slices back from storage, falling back to empty defaults
    /// when a slice is missing or unreadable. Called once before first
    /// render; the result seeds the initial state.
    pub fn restore(&self) -> (UiPreferences, Vec<Opportunity>) {
        let preferences = match self.storage.load_preferences() {
            Ok(Some(preferences)) => preferences,
            Ok(None) => UiPreferences::default(),
            Err(err) => {
                warn!(error = %err, "failed to load persisted UI preferences, using defaults");
                UiPreferences::default()
            }
        };
        let opportunities = match self.storage.load_opportunities() {
            Ok(Some(opportunities)) => opportunities,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "failed to load persisted opportunities, using defaults");
                Vec::new()
            }
        };

        *self.last_preferences.lock() = Some(preferences.clone());
        *self.last_opportunities.lock() = Some(opportunities.clone());
        (preferences, opportunities)
    }

    /// Mirror changed slices of the given state to storage.
    pub fn observe(&self, state: &AppState) {
        let preferences = state.preferences();
        {
            let mut last = self.last_preferences.lock();
            if last.as_ref() != Some(&preferences) {
                match self.storage.save_preferences(&preferences) {
                    Ok(()) => *last = Some(preferences),
                    Err(err) => warn!(error = %err, "failed to save UI preferences"),
                }
            }
        }
        {
            let mut last = self.last_opportunities.lock();
            if last.as_ref() != Some(&state.opportunities) {
                match self.storage.save_opportunities(&state.opportunities) {
                    Ok(()) => *last = Some(state.opportunities.clone()),
                    Err(err) => warn!(error = %err, "failed to save opportunities"),
                }
            }
        }
    }

    /// Subscribe to the store so every dispatch mirrors its changes.
    pub fn attach(self: &Arc<Self>, store: &AppStore) {
        let sync = Arc::clone(self);
        store.subscribe(move |state| sync.observe(state));
    }
}
