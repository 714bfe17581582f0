mod controller;
mod format;
mod media_event;
mod state;

pub use {
    controller::PlaybackController,
    format::format_time,
    media_event::MediaEvent,
    state::{PlaybackState, TransportPhase},
};

/// Position slider bound used until the media reports a duration.
pub(crate) const DEFAULT_SLIDER_MAX: f64 = 100.0;
