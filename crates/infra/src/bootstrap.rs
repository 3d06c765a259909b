//! Application bootstrap
//!
//! The single construction point: builds the storage adapter, restores the
//! persisted slices into the initial state, wires the persistence sync, and
//! hands the UI everything it needs as one context value to thread through.

use std::sync::Arc;
use std::time::Duration;

use miniseller_core::leads::ports::LeadGateway;
use miniseller_core::persistence::ports::PreferencesStore;
use miniseller_core::{AppStore, LeadsService, PersistenceSync};
use miniseller_domain::{AppState, Result};

use crate::config::AppConfig;
use crate::gateway::{GatewayConfig, SimulatedLeadGateway};
use crate::persistence::JsonFileStore;

/// Everything a consumer needs, assembled once at process entry.
pub struct AppContext {
    /// The single state container.
    pub store: Arc<AppStore>,
    /// Save/convert/load orchestration.
    pub leads: Arc<LeadsService>,
    /// Durable-slice mirror, already attached to the store.
    pub sync: Arc<PersistenceSync>,
}

impl AppContext {
    /// Build the full object graph from configuration.
    ///
    /// Restores the persisted slices before the store is constructed so the
    /// first rendered state already carries them.
    pub fn initialize(config: &AppConfig) -> Result<Self> {
        let storage = Arc::new(JsonFileStore::new(&config.data_dir)?);
        let sync = PersistenceSync::new(storage as Arc<dyn PreferencesStore>);
        let (preferences, opportunities) = sync.restore();

        let store = AppStore::new(AppState::with_restored(preferences, opportunities));
        sync.attach(&store);

        let gateway = Arc::new(SimulatedLeadGateway::new(
            GatewayConfig::new(config.leads_path.clone())
                .with_save_delay(Duration::from_millis(config.save_delay_ms))
                .with_failure_rate(config.failure_rate),
        ));
        let leads =
            Arc::new(LeadsService::new(Arc::clone(&store), gateway as Arc<dyn LeadGateway>));

        Ok(Self { store, leads, sync })
    }
}
