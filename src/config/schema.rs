//! Configuration schema definitions.
//!
//! Startup settings for the plugin. All types derive Serde traits for
//! deserialization from the settings file.

use serde::{Deserialize, Serialize};

/// Root startup settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PluginSettings {
    /// Registry and hand-off locations.
    pub mapchange: MapChangeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Locations of the configuration list and the hand-off file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MapChangeConfig {
    /// Path to the line-oriented `<name> <path>` list.
    #[serde(alias = "ConfigurationFile")]
    pub configuration_file: String,

    /// Path the chosen configuration is written to for the restart script.
    #[serde(alias = "OutputFile")]
    pub output_file: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
