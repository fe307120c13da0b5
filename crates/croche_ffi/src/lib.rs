//! Flutter-facing bindings for the Croche counter core.

pub mod api;
