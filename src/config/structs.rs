//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum diagnostic level.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Generation defaults. Every field is optional so the CLI can tell
/// "unset" apart from an explicit value.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GenerateConfig {
    /// Format name (apache_common, json, audio_player, ...).
    pub format: Option<String>,
    /// Output kind (stdout, log, gz).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Destination path; `~` is expanded.
    pub output: Option<String>,
    /// Number of records.
    pub number: Option<u64>,
    /// Byte budget (e.g., "10M").
    pub bytes: Option<String>,
    /// Rotation threshold in records or bytes (e.g., "1000", "1M").
    pub split_by: Option<String>,
    /// Content-time step (e.g., "1s").
    pub sleep: Option<String>,
    /// Pause before each record (e.g., "250ms").
    pub delay: Option<String>,
    /// Truncate instead of append.
    pub overwrite: Option<bool>,
    /// Never stop.
    pub forever: Option<bool>,
}
