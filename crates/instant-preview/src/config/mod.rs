#[allow(clippy::module_inception)]
mod config;
mod labels_config;
mod playback_config;
mod storage_config;
mod window_config;

pub(crate) use {
    config::Config, labels_config::LabelsConfig, playback_config::PlaybackConfig,
    storage_config::StorageConfig, window_config::WindowConfig,
};

pub(crate) const DEFAULT_VOLUME: f64 = 1.0;
pub(crate) const DEFAULT_TICK_INTERVAL_MS: u64 = 250;

pub(crate) fn default_volume() -> f64 {
    DEFAULT_VOLUME
}

pub(crate) fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}
