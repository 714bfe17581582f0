use crate::config::{default_tick_interval_ms, default_volume};

use serde::{Deserialize, Serialize};

/// Playback preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Volume applied when the preview opens, in `[0, 1]`.
    #[serde(default = "default_volume")]
    pub initial_volume: f64,

    /// How often the media clock reports its position, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            initial_volume: default_volume(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}
