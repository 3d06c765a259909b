//! Application state store
//!
//! The single source of truth for leads, opportunities, UI filters,
//! selection, and load-lifecycle flags. State is mutated only through
//! [`AppStore::dispatch`], which applies the pure reducer under a write lock
//! so transitions are atomic and totally ordered.

mod actions;
mod reducer;

use std::sync::Arc;

use miniseller_domain::{AppState, Lead};
use parking_lot::RwLock;
use tracing::debug;

pub use actions::Action;
pub use reducer::reduce;

/// Callback invoked with the new state after every applied transition.
type Subscriber = Box<dyn Fn(&AppState) + Send + Sync>;

/// The single state container.
///
/// Constructed once at process entry and threaded through consumers; there is
/// no ambient singleton. Subscribers run synchronously on the dispatching
/// thread, after the write lock is released, so a subscriber may itself
/// dispatch without deadlocking.
pub struct AppStore {
    state: RwLock<AppState>,
    subscribers: RwLock<Vec<Subscriber>>,
}

impl AppStore {
    /// Create a store seeded with the given initial state.
    pub fn new(initial: AppState) -> Arc<Self> {
        Arc::new(Self { state: RwLock::new(initial), subscribers: RwLock::new(Vec::new()) })
    }

    /// Apply an action through the reducer and notify subscribers.
    ///
    /// Transitions are serialized by the write lock: dispatches are applied
    /// in the order their locks are acquired, and no transition interleaves
    /// with another.
    pub fn dispatch(&self, action: Action) {
        let next = {
            let mut state = self.state.write();
            let next = reduce(&state, &action);
            *state = next.clone();
            next
        };
        debug!(action = action.name(), "state transition applied");
        for subscriber in self.subscribers.read().iter() {
            subscriber(&next);
        }
    }

    /// Register a subscriber notified with the state after each transition.
    pub fn subscribe(&self, subscriber: impl Fn(&AppState) + Send + Sync + 'static) {
        self.subscribers.write().push(Box::new(subscriber));
    }

    /// Clone of the full current state.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// Current copy of the lead with the given id, if present.
    pub fn lead_by_id(&self, id: &str) -> Option<Lead> {
        self.state.read().leads.iter().find(|lead| lead.id == id).cloned()
    }

    /// The lead currently open in the detail panel, if any.
    pub fn selected_lead(&self) -> Option<Lead> {
        self.state.read().selected_lead.clone()
    }

    /// Whether any opportunity references the given lead.
    pub fn has_opportunity_for(&self, lead_id: &str) -> bool {
        self.state.read().has_opportunity_for(lead_id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use miniseller_domain::StatusFilter;

    use super::*;

    #[test]
    fn dispatches_apply_in_order() {
        let store = AppStore::new(AppState::default());
        store.dispatch(Action::SearchChanged("first".to_string()));
        store.dispatch(Action::SearchChanged("second".to_string()));
        store.dispatch(Action::FilterChanged(StatusFilter::Qualified));

        let state = store.snapshot();
        assert_eq!(state.search_query, "second");
        assert_eq!(state.status_filter, StatusFilter::Qualified);
    }

    #[test]
    fn subscribers_observe_every_transition() {
        let store = AppStore::new(AppState::default());
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(Action::SortChanged(true));
        store.dispatch(Action::ErrorCleared);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn subscriber_sees_post_transition_state() {
        let store = AppStore::new(AppState::default());
        let observed = Arc::new(RwLock::new(String::new()));
        let sink = Arc::clone(&observed);
        store.subscribe(move |state| {
            *sink.write() = state.search_query.clone();
        });

        store.dispatch(Action::SearchChanged("acme".to_string()));
        assert_eq!(*observed.read(), "acme");
    }
}
