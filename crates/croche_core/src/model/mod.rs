//! Domain model for counter objects and their counters.
//!
//! # Responsibility
//! - Define the value types held by the in-memory store.
//! - Keep display metadata (labels, colors) next to the counted value.
//!
//! # Invariants
//! - Every object and counter is identified by a stable UUID.
//! - A `CounterObject` exclusively owns its `Counter` list.

pub mod color;
pub mod counter;
pub mod object;
