/// Transport phase of the active media session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportPhase {
    /// Nothing started since the last selection change or end of media.
    #[default]
    Idle,
    /// Media is playing.
    Playing,
    /// Playback was paused by the user or by scrubbing.
    Paused,
}

/// Transport state of the active media session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Whether the media is playing.
    pub is_playing: bool,
    /// Elapsed position in seconds.
    pub position_seconds: f64,
    /// Media duration in seconds, 0 until reported.
    pub duration_seconds: f64,
    /// Volume in `[0, 1]`.
    pub volume: f64,
}

impl PlaybackState {
    /// Stopped at zero with the given volume.
    pub fn new(volume: f64) -> Self {
        Self {
            is_playing: false,
            position_seconds: 0.0,
            duration_seconds: 0.0,
            volume,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(1.0)
    }
}
