//! In-memory object/counter store with change notification.
//!
//! # Responsibility
//! - Hold every counter object for the lifetime of the host session.
//! - Serialize mutations and publish immutable, versioned snapshots.
//! - Notify subscribers after each state-changing mutation.
//!
//! # Invariants
//! - Readers observe either the pre- or post-mutation state, never a mix.
//! - `version` increases by exactly one per state-changing mutation.
//! - Operations that reference a missing ID are silent no-ops: no panic,
//!   no version bump, no notification.
//! - New objects/counters are appended; edits never move an entity.

mod config;
mod counter_store;
mod observer;
mod snapshot;

pub use config::StoreConfig;
pub use counter_store::CounterStore;
pub use observer::Subscription;
pub use snapshot::{StoreChange, StoreEvent, StoreSnapshot};
