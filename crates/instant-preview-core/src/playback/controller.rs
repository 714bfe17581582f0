//! Transport state machine for the single active media session.
//!
//! The controller owns the media session exclusively. Every selection change
//! starts a new session id; media events tagged with an older id are dropped
//! so a slow-loading source cannot leak position or duration into the next
//! selection.

use crate::{
    MediaEvent, MediaSession, PlaybackState, TransportPhase, playback::DEFAULT_SLIDER_MAX,
};

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Drives one [`MediaSession`] and mirrors its state.
pub struct PlaybackController<M> {
    media: M,
    state: PlaybackState,
    phase: TransportPhase,
    session_id: Uuid,
    media_ready: bool,
}

impl<M: MediaSession> PlaybackController<M> {
    /// Take ownership of `media` and apply the initial volume.
    ///
    /// An out-of-range initial volume falls back to full volume.
    #[instrument(skip(media))]
    pub fn new(mut media: M, initial_volume: f64) -> Self {
        let volume = if is_unit_interval(initial_volume) {
            initial_volume
        } else {
            warn!(initial_volume, "Initial volume out of range, using 1.0");
            1.0
        };
        media.set_volume(volume);

        Self {
            media,
            state: PlaybackState::new(volume),
            phase: TransportPhase::Idle,
            session_id: Uuid::new_v4(),
            media_ready: false,
        }
    }

    /// Current transport state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current transport phase.
    pub fn phase(&self) -> TransportPhase {
        self.phase
    }

    /// Id of the active media session.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Whether a source is loaded and transport commands reach the media.
    pub fn is_media_ready(&self) -> bool {
        self.media_ready
    }

    #[cfg(test)]
    pub(crate) fn media(&self) -> &M {
        &self.media
    }

    /// Mutable access to the owned media session, for hosts that pump it.
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Upper bound of the position slider: the duration once known.
    pub fn slider_max(&self) -> f64 {
        if self.state.duration_seconds > 0.0 {
            self.state.duration_seconds
        } else {
            DEFAULT_SLIDER_MAX
        }
    }

    /// Switch the media to a new source and reset transport to idle at zero.
    ///
    /// Playback of the new source is not started. Returns the new session id.
    #[instrument(skip(self))]
    pub fn load_source(&mut self, url: &str) -> Uuid {
        self.session_id = Uuid::new_v4();
        self.phase = TransportPhase::Idle;
        self.state.is_playing = false;
        self.state.position_seconds = 0.0;

        self.media_ready = if url.is_empty() {
            false
        } else {
            match self.media.load(self.session_id, url) {
                Ok(()) => {
                    self.media.seek(0.0);
                    true
                }
                Err(e) => {
                    warn!(session_id = %self.session_id, error = ?e, "Failed to load media source");
                    false
                }
            }
        };

        debug!(
            session_id = %self.session_id,
            media_ready = self.media_ready,
            "Media session reset"
        );

        self.session_id
    }

    /// Issue the opposite of the current transport state.
    ///
    /// Returns whether the media is playing afterwards.
    #[instrument(skip(self))]
    pub fn toggle_play(&mut self) -> bool {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
        self.state.is_playing
    }

    /// Start playback if a source is loaded.
    pub fn play(&mut self) {
        if !self.media_ready || self.state.is_playing {
            return;
        }

        match self.media.play() {
            Ok(()) => {
                self.set_phase(TransportPhase::Playing);
                info!(session_id = %self.session_id, "Playback started");
            }
            Err(e) => {
                warn!(session_id = %self.session_id, error = ?e, "Media rejected play");
            }
        }
    }

    /// Pause playback if playing.
    pub fn pause(&mut self) {
        if !self.state.is_playing {
            return;
        }

        self.media.pause();
        self.set_phase(TransportPhase::Paused);
        info!(
            session_id = %self.session_id,
            position_seconds = self.state.position_seconds,
            "Playback paused"
        );
    }

    /// Jump to `position_seconds`, pausing if playing.
    ///
    /// The position is applied exactly as supplied, without coalescing.
    /// Negative and NaN positions are ignored.
    #[instrument(skip(self))]
    pub fn seek(&mut self, position_seconds: f64) {
        if position_seconds.is_nan() || position_seconds < 0.0 {
            debug!(position_seconds, "Ignoring invalid seek");
            return;
        }

        self.pause();
        self.state.position_seconds = position_seconds;

        if self.media_ready {
            self.media.seek(position_seconds);
        }
    }

    /// Apply a volume in `[0, 1]`. Out-of-range values leave the prior
    /// volume in place. Returns whether the volume was applied.
    #[instrument(skip(self))]
    pub fn set_volume(&mut self, volume: f64) -> bool {
        if !is_unit_interval(volume) {
            warn!(volume, "Ignoring out-of-range volume");
            return false;
        }

        self.state.volume = volume;
        self.media.set_volume(volume);
        true
    }

    /// Reconcile a media-reported update into the transport state.
    ///
    /// Returns whether the event belonged to the active session and changed
    /// the state.
    #[instrument(skip(self))]
    pub fn handle_media_event(&mut self, session_id: Uuid, event: MediaEvent) -> bool {
        if session_id != self.session_id {
            debug!(
                stale_session = %session_id,
                session_id = %self.session_id,
                "Dropping event from superseded media session"
            );
            return false;
        }

        match event {
            MediaEvent::TimeUpdate(position) => {
                if !position.is_finite() || position < 0.0 {
                    return false;
                }
                self.state.position_seconds = position;
                true
            }
            MediaEvent::LoadedMetadata(duration) => {
                if !duration.is_finite() || duration < 0.0 {
                    debug!(duration, "Ignoring unusable duration");
                    return false;
                }
                self.state.duration_seconds = duration;
                debug!(session_id = %self.session_id, duration, "Duration known");
                true
            }
            MediaEvent::Ended => {
                self.set_phase(TransportPhase::Idle);
                info!(session_id = %self.session_id, "Playback ended");
                true
            }
        }
    }

    fn set_phase(&mut self, phase: TransportPhase) {
        self.phase = phase;
        self.state.is_playing = phase == TransportPhase::Playing;
    }
}

fn is_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
