//! Counter domain model.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused.
//! - `value` has no bounds; arithmetic wraps at the `i64` extremes.

use crate::model::color::ArgbColor;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one counter.
pub type CounterId = Uuid;

/// A named integer value shown as one row inside an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub id: CounterId,
    pub label: String,
    pub value: i64,
    pub color: ArgbColor,
}

impl Counter {
    /// Creates a counter with a generated stable ID.
    pub fn new(label: impl Into<String>, value: i64, color: ArgbColor) -> Self {
        Self::with_id(Uuid::new_v4(), label, value, color)
    }

    /// Creates a counter with a caller-provided ID.
    pub fn with_id(id: CounterId, label: impl Into<String>, value: i64, color: ArgbColor) -> Self {
        Self {
            id,
            label: label.into(),
            value,
            color,
        }
    }

    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.wrapping_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::Counter;
    use crate::model::color::ArgbColor;

    #[test]
    fn new_generates_distinct_ids() {
        let first = Counter::new("Rows", 0, ArgbColor::WHITE);
        let second = Counter::new("Rows", 0, ArgbColor::WHITE);
        assert!(!first.id.is_nil());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn arithmetic_wraps_at_extremes() {
        let mut counter = Counter::new("edge", i64::MAX, ArgbColor::BLACK);
        counter.increment();
        assert_eq!(counter.value, i64::MIN);
        counter.decrement();
        assert_eq!(counter.value, i64::MAX);
    }
}
