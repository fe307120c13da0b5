//! Immutable store views and change events.

use crate::model::counter::{Counter, CounterId};
use crate::model::object::{CounterObject, ObjectId};
use std::sync::Arc;

/// Versioned, immutable view of every object at one instant.
///
/// Cloning is cheap; the object list is shared behind `Arc`. A snapshot is
/// never modified after publication, so holding one across later mutations
/// keeps showing the state it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    version: u64,
    objects: Arc<[CounterObject]>,
}

impl StoreSnapshot {
    pub(crate) fn new(version: u64, objects: Vec<CounterObject>) -> Self {
        Self {
            version,
            objects: Arc::from(objects),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    /// Mutation counter; `0` for a fresh store.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Objects in display (creation) order.
    pub fn objects(&self) -> &[CounterObject] {
        &self.objects
    }

    pub fn object(&self, object_id: ObjectId) -> Option<&CounterObject> {
        self.objects.iter().find(|object| object.id == object_id)
    }

    pub fn counter(&self, object_id: ObjectId, counter_id: CounterId) -> Option<&Counter> {
        self.object(object_id)?.counter(counter_id)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Total counters across every object.
    pub fn counter_count(&self) -> usize {
        self.objects.iter().map(CounterObject::counter_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// What a state-changing mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    ObjectCreated {
        object_id: ObjectId,
    },
    ObjectRenamed {
        object_id: ObjectId,
    },
    ObjectRecolored {
        object_id: ObjectId,
    },
    /// Object removed together with `removed_counters` counters.
    ObjectDeleted {
        object_id: ObjectId,
        removed_counters: usize,
    },
    CounterCreated {
        object_id: ObjectId,
        counter_id: CounterId,
    },
    CounterRenamed {
        object_id: ObjectId,
        counter_id: CounterId,
    },
    CounterRecolored {
        object_id: ObjectId,
        counter_id: CounterId,
    },
    CounterDeleted {
        object_id: ObjectId,
        counter_id: CounterId,
    },
    /// Set, increment or decrement; `value` is the new value.
    CounterValueChanged {
        object_id: ObjectId,
        counter_id: CounterId,
        value: i64,
    },
}

impl StoreEvent {
    /// Stable event name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ObjectCreated { .. } => "object_created",
            Self::ObjectRenamed { .. } => "object_renamed",
            Self::ObjectRecolored { .. } => "object_recolored",
            Self::ObjectDeleted { .. } => "object_deleted",
            Self::CounterCreated { .. } => "counter_created",
            Self::CounterRenamed { .. } => "counter_renamed",
            Self::CounterRecolored { .. } => "counter_recolored",
            Self::CounterDeleted { .. } => "counter_deleted",
            Self::CounterValueChanged { .. } => "counter_value_changed",
        }
    }

    /// Object touched by this event.
    pub fn object_id(&self) -> ObjectId {
        match *self {
            Self::ObjectCreated { object_id }
            | Self::ObjectRenamed { object_id }
            | Self::ObjectRecolored { object_id }
            | Self::ObjectDeleted { object_id, .. }
            | Self::CounterCreated { object_id, .. }
            | Self::CounterRenamed { object_id, .. }
            | Self::CounterRecolored { object_id, .. }
            | Self::CounterDeleted { object_id, .. }
            | Self::CounterValueChanged { object_id, .. } => object_id,
        }
    }
}

/// Notification delivered to subscribers after a mutation is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub event: StoreEvent,
    /// State right after this mutation; `snapshot.version()` identifies it.
    pub snapshot: StoreSnapshot,
}

impl StoreChange {
    pub fn version(&self) -> u64 {
        self.snapshot.version()
    }
}
