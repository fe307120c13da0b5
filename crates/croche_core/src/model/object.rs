//! Counter object domain model.
//!
//! # Invariants
//! - `counters` order is display order; new counters are appended.
//! - Counter lookups match by exact ID and affect the first match only.

use crate::model::color::ArgbColor;
use crate::model::counter::{Counter, CounterId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one counter object.
pub type ObjectId = Uuid;

/// User-named group that owns an ordered list of counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterObject {
    pub id: ObjectId,
    pub name: String,
    pub color: ArgbColor,
    pub counters: Vec<Counter>,
}

impl CounterObject {
    /// Creates an empty object with a generated stable ID.
    pub fn new(name: impl Into<String>, color: ArgbColor) -> Self {
        Self::with_id(Uuid::new_v4(), name, color)
    }

    /// Creates an empty object with a caller-provided ID.
    pub fn with_id(id: ObjectId, name: impl Into<String>, color: ArgbColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            counters: Vec::new(),
        }
    }

    /// Number of counters shown on the object card.
    pub fn counter_count(&self) -> usize {
        self.counters.len()
    }

    pub fn counter(&self, counter_id: CounterId) -> Option<&Counter> {
        self.counters.iter().find(|counter| counter.id == counter_id)
    }

    pub fn counter_mut(&mut self, counter_id: CounterId) -> Option<&mut Counter> {
        self.counters
            .iter_mut()
            .find(|counter| counter.id == counter_id)
    }

    /// Removes the first counter with `counter_id`.
    ///
    /// Returns the removed counter, or `None` when no counter matched.
    pub fn remove_counter(&mut self, counter_id: CounterId) -> Option<Counter> {
        let index = self
            .counters
            .iter()
            .position(|counter| counter.id == counter_id)?;
        Some(self.counters.remove(index))
    }
}
