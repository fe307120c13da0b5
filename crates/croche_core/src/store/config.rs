//! Store construction settings.

use crate::model::color::ArgbColor;
use crate::theme::{DEFAULT_COUNTER_COLOR, DEFAULT_OBJECT_COLOR};
use serde::{Deserialize, Serialize};

/// Defaults applied to newly created objects and counters.
///
/// Missing fields fall back to [`StoreConfig::default`] when deserialized,
/// so hosts may ship a partial JSON/TOML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Value assigned to every new counter.
    pub initial_counter_value: i64,
    pub default_object_color: ArgbColor,
    pub default_counter_color: ArgbColor,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_counter_value: 0,
            default_object_color: DEFAULT_OBJECT_COLOR,
            default_counter_color: DEFAULT_COUNTER_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StoreConfig;
    use crate::model::color::ArgbColor;
    use crate::theme::DEFAULT_OBJECT_COLOR;

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let raw = r#"{"initial_counter_value": 10, "default_counter_color": 4294967295}"#;
        let config: StoreConfig =
            serde_json::from_str(raw).expect("partial config should deserialize");

        assert_eq!(config.initial_counter_value, 10);
        assert_eq!(config.default_counter_color, ArgbColor::WHITE);
        assert_eq!(config.default_object_color, DEFAULT_OBJECT_COLOR);
    }

    #[test]
    fn empty_document_equals_default() {
        let config: StoreConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(config, StoreConfig::default());
    }
}
