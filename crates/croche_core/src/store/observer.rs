//! Subscriber registry for store change notifications.
//!
//! # Invariants
//! - Subscribers are notified in registration order.
//! - Callbacks run without any store or registry lock held, so a callback
//!   may read, mutate, subscribe or unsubscribe.
//! - Dropping a [`Subscription`] removes its callback before the next
//!   notification cycle.

use crate::store::snapshot::StoreChange;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

pub(crate) type ChangeCallback = Arc<dyn Fn(&StoreChange) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, ChangeCallback)>,
}

/// Shared list of change callbacks owned by one store.
#[derive(Default)]
pub(crate) struct SubscriberList {
    registry: Arc<Mutex<Registry>>,
}

impl SubscriberList {
    pub(crate) fn subscribe(&self, callback: ChangeCallback) -> Subscription {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, callback));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub(crate) fn len(&self) -> usize {
        lock(&self.registry).entries.len()
    }

    pub(crate) fn notify(&self, change: &StoreChange) {
        let callbacks = lock(&self.registry)
            .entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect::<Vec<_>>();
        for callback in callbacks {
            callback(change);
        }
    }
}

// Registry contents stay consistent even if a holder panicked mid-scope.
fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Guard for one registered change callback.
///
/// Unsubscribes on drop. Outliving the store is harmless.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Explicitly stops delivery; equivalent to dropping the guard.
    pub fn unsubscribe(self) {}

    /// Returns whether the owning store still exists.
    pub fn is_active(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).entries.retain(|(id, _)| *id != self.id);
        }
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
