//! Core state for the Croche counter app.
//! This crate owns every object/counter mutation rule; UI layers only read
//! snapshots and call store operations.

pub mod input;
pub mod logging;
pub mod model;
pub mod store;
pub mod theme;

pub use input::coerce_counter_value;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::color::ArgbColor;
pub use model::counter::{Counter, CounterId};
pub use model::object::{CounterObject, ObjectId};
pub use store::{CounterStore, StoreChange, StoreConfig, StoreEvent, StoreSnapshot, Subscription};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
