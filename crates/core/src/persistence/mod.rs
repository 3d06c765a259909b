//! Persistence sync
//!
//! One-directional mirror of the durable state slices (UI preferences and
//! opportunities) into local storage, plus the restore path that merges them
//! back into the initial state.

pub mod ports;
mod sync;

pub use sync::PersistenceSync;
