//! Counter store use-case entry points.
//!
//! # Responsibility
//! - Provide create/rename/recolor/delete for objects and counters.
//! - Provide set/increment/decrement for counter values.
//! - Publish every applied mutation as a new snapshot, then notify.
//!
//! # Invariants
//! - All mutations run under one exclusive lock over the whole object list.
//! - A mutation edits a private copy of the list and swaps it in only when
//!   its target exists (copy-on-write).
//! - Lookups are exact-ID linear scans; only the first match is affected.

use crate::model::color::ArgbColor;
use crate::model::counter::{Counter, CounterId};
use crate::model::object::{CounterObject, ObjectId};
use crate::store::config::StoreConfig;
use crate::store::observer::{SubscriberList, Subscription};
use crate::store::snapshot::{StoreChange, StoreEvent, StoreSnapshot};
use log::debug;
use std::sync::{Arc, PoisonError, RwLock};

/// Single source of truth for all counter objects in one host session.
///
/// Construct once at startup and hand it (usually behind `Arc`) to every
/// consumer. All methods take `&self`; the store is `Send + Sync`.
///
/// Notifications run on the mutating thread after the new snapshot is
/// published. With several writing threads, deliveries may interleave;
/// subscribers that care should compare [`StoreChange::version`].
pub struct CounterStore {
    config: StoreConfig,
    state: RwLock<StoreSnapshot>,
    subscribers: SubscriberList,
}

impl CounterStore {
    /// Creates an empty store with default settings.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store that applies `config` to new entities.
    pub fn with_config(config: StoreConfig) -> Self {
        debug!(
            "event=store_init module=store status=ok initial_counter_value={}",
            config.initial_counter_value
        );
        Self {
            config,
            state: RwLock::new(StoreSnapshot::empty()),
            subscribers: SubscriberList::default(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the current published snapshot.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn version(&self) -> u64 {
        self.snapshot().version()
    }

    pub fn object(&self, object_id: ObjectId) -> Option<CounterObject> {
        self.snapshot().object(object_id).cloned()
    }

    pub fn counter(&self, object_id: ObjectId, counter_id: CounterId) -> Option<Counter> {
        self.snapshot().counter(object_id, counter_id).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.snapshot().object_count()
    }

    pub fn counter_count(&self) -> usize {
        self.snapshot().counter_count()
    }

    /// Registers `callback` for every future state-changing mutation.
    ///
    /// Delivery stops when the returned guard is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&StoreChange) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(Arc::new(callback))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Appends a new empty object and returns its ID.
    ///
    /// Any name is accepted, including an empty one.
    pub fn create_object(&self, name: impl Into<String>) -> ObjectId {
        let object = CounterObject::new(name, self.config.default_object_color);
        let object_id = object.id;
        self.apply("create_object", move |objects| {
            objects.push(object);
            Some(StoreEvent::ObjectCreated { object_id })
        });
        object_id
    }

    pub fn rename_object(&self, object_id: ObjectId, new_name: impl Into<String>) {
        let new_name = new_name.into();
        self.apply("rename_object", move |objects| {
            find_object_mut(objects, object_id)?.name = new_name;
            Some(StoreEvent::ObjectRenamed { object_id })
        });
    }

    pub fn recolor_object(&self, object_id: ObjectId, new_color: ArgbColor) {
        self.apply("recolor_object", move |objects| {
            find_object_mut(objects, object_id)?.color = new_color;
            Some(StoreEvent::ObjectRecolored { object_id })
        });
    }

    /// Removes the object and every counter it owns.
    pub fn delete_object(&self, object_id: ObjectId) {
        self.apply("delete_object", move |objects| {
            let index = objects.iter().position(|object| object.id == object_id)?;
            let removed = objects.remove(index);
            Some(StoreEvent::ObjectDeleted {
                object_id,
                removed_counters: removed.counter_count(),
            })
        });
    }

    /// Appends a counter to `object_id` and returns its ID.
    ///
    /// Returns `None` and leaves the store untouched when the object is
    /// missing.
    pub fn create_counter(
        &self,
        object_id: ObjectId,
        label: impl Into<String>,
    ) -> Option<CounterId> {
        let counter = Counter::new(
            label,
            self.config.initial_counter_value,
            self.config.default_counter_color,
        );
        let counter_id = counter.id;
        self.apply("create_counter", move |objects| {
            find_object_mut(objects, object_id)?.counters.push(counter);
            Some(StoreEvent::CounterCreated {
                object_id,
                counter_id,
            })
        })
        .map(|_| counter_id)
    }

    pub fn rename_counter(
        &self,
        object_id: ObjectId,
        counter_id: CounterId,
        new_label: impl Into<String>,
    ) {
        let new_label = new_label.into();
        self.apply("rename_counter", move |objects| {
            find_counter_mut(objects, object_id, counter_id)?.label = new_label;
            Some(StoreEvent::CounterRenamed {
                object_id,
                counter_id,
            })
        });
    }

    pub fn recolor_counter(
        &self,
        object_id: ObjectId,
        counter_id: CounterId,
        new_color: ArgbColor,
    ) {
        self.apply("recolor_counter", move |objects| {
            find_counter_mut(objects, object_id, counter_id)?.color = new_color;
            Some(StoreEvent::CounterRecolored {
                object_id,
                counter_id,
            })
        });
    }

    pub fn delete_counter(&self, object_id: ObjectId, counter_id: CounterId) {
        self.apply("delete_counter", move |objects| {
            find_object_mut(objects, object_id)?.remove_counter(counter_id)?;
            Some(StoreEvent::CounterDeleted {
                object_id,
                counter_id,
            })
        });
    }

    /// Sets the value directly. Negative values are kept as-is.
    pub fn set_counter_value(&self, object_id: ObjectId, counter_id: CounterId, new_value: i64) {
        self.update_value("set_counter_value", object_id, counter_id, |counter| {
            counter.value = new_value;
        });
    }

    pub fn increment_counter(&self, object_id: ObjectId, counter_id: CounterId) {
        self.update_value("increment_counter", object_id, counter_id, Counter::increment);
    }

    /// Decrements without a lower bound.
    pub fn decrement_counter(&self, object_id: ObjectId, counter_id: CounterId) {
        self.update_value("decrement_counter", object_id, counter_id, Counter::decrement);
    }

    fn update_value(
        &self,
        op: &'static str,
        object_id: ObjectId,
        counter_id: CounterId,
        update: impl FnOnce(&mut Counter),
    ) {
        self.apply(op, move |objects| {
            let counter = find_counter_mut(objects, object_id, counter_id)?;
            update(&mut *counter);
            Some(StoreEvent::CounterValueChanged {
                object_id,
                counter_id,
                value: counter.value,
            })
        });
    }

    /// Runs `mutation` against a copy of the object list and publishes it.
    ///
    /// `mutation` returns `None` when its target is missing; the copy is then
    /// discarded and nobody is notified.
    fn apply<F>(&self, op: &'static str, mutation: F) -> Option<StoreEvent>
    where
        F: FnOnce(&mut Vec<CounterObject>) -> Option<StoreEvent>,
    {
        let change = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let mut objects = state.objects().to_vec();
            let Some(event) = mutation(&mut objects) else {
                debug!(
                    "event=store_mutation module=store status=noop op={op} reason=not_found"
                );
                return None;
            };
            let next = StoreSnapshot::new(state.version() + 1, objects);
            *state = next.clone();
            StoreChange {
                event,
                snapshot: next,
            }
        };

        debug!(
            "event=store_mutation module=store status=ok op={op} change={} object_id={} version={}",
            change.event.name(),
            change.event.object_id(),
            change.version()
        );
        self.subscribers.notify(&change);
        Some(change.event)
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

fn find_object_mut(
    objects: &mut [CounterObject],
    object_id: ObjectId,
) -> Option<&mut CounterObject> {
    objects.iter_mut().find(|object| object.id == object_id)
}

fn find_counter_mut(
    objects: &mut [CounterObject],
    object_id: ObjectId,
    counter_id: CounterId,
) -> Option<&mut Counter> {
    find_object_mut(objects, object_id)?.counter_mut(counter_id)
}

#[cfg(test)]
mod tests {
    use super::CounterStore;
    use crate::store::snapshot::StoreEvent;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[test]
    fn apply_noop_keeps_version_and_skips_notification() {
        let store = CounterStore::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let _subscription =
            store.subscribe(move |change| sink.lock().unwrap().push(change.event));

        store.rename_object(Uuid::new_v4(), "ghost");
        store.delete_counter(Uuid::new_v4(), Uuid::new_v4());

        assert_eq!(store.version(), 0);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn value_event_carries_new_value() {
        let store = CounterStore::new();
        let object_id = store.create_object("Blanket");
        let counter_id = store
            .create_counter(object_id, "Squares")
            .expect("object exists");

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let _subscription =
            store.subscribe(move |change| sink.lock().unwrap().push(change.event));

        store.set_counter_value(object_id, counter_id, 7);
        store.decrement_counter(object_id, counter_id);

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                StoreEvent::CounterValueChanged {
                    object_id,
                    counter_id,
                    value: 7
                },
                StoreEvent::CounterValueChanged {
                    object_id,
                    counter_id,
                    value: 6
                },
            ]
        );
    }

    #[test]
    fn callback_may_read_the_store_without_deadlock() {
        let store = Arc::new(CounterStore::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let reader = Arc::clone(&store);
        let sink = Arc::clone(&seen);
        let _subscription = store.subscribe(move |change| {
            assert_eq!(reader.version(), change.version());
            sink.lock().unwrap().push(reader.object_count());
        });

        store.create_object("Socks");
        store.create_object("Mittens");

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }
}
