// Configuration type definitions

use serde::Deserialize;

use crate::metrics::Language;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Counting configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct CountingConfig {
    /// Recount on every edit instead of waiting for Ctrl+R
    #[serde(default = "default_live_update")]
    pub live_update: bool,
    /// Delay live recounts until typing pauses for this long (0 = immediate)
    #[serde(default)]
    pub debounce_ms: u64,
}

fn default_live_update() -> bool {
    true
}

impl Default for CountingConfig {
    fn default() -> Self {
        CountingConfig {
            live_update: true,
            debounce_ms: 0,
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Language,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub counting: CountingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
