//! Media session driven by a wall clock.
//!
//! Stands in for a video element in the terminal shell: the playhead advances
//! with elapsed time while playing and is reported on every tick. The
//! duration comes from the source's MP4 movie header when it can be read;
//! playback then stops at the end and reports it once.

use instant_preview_core::{CoreResult, MediaEvent, MediaSession};

use std::{
    fs::File,
    path::{Path, PathBuf},
    time::Instant,
};

use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

/// Wall-clock playhead with pending event queue.
#[derive(Debug)]
pub struct ClockMediaSession {
    session_id: Option<Uuid>,
    playhead: f64,
    duration: Option<f64>,
    is_playing: bool,
    last_tick: Instant,
    pending: Vec<(Uuid, MediaEvent)>,
}

impl ClockMediaSession {
    /// An unloaded session.
    pub fn new() -> Self {
        Self {
            session_id: None,
            playhead: 0.0,
            duration: None,
            is_playing: false,
            last_tick: Instant::now(),
            pending: Vec::new(),
        }
    }

    /// Advance the playhead by the time elapsed since the last tick and
    /// queue a position report. Reaching the duration queues `Ended`.
    pub fn tick(&mut self) {
        let Some(session_id) = self.session_id else {
            self.last_tick = Instant::now();
            return;
        };
        if !self.is_playing {
            self.last_tick = Instant::now();
            return;
        }

        self.advance();
        self.pending
            .push((session_id, MediaEvent::TimeUpdate(self.playhead)));

        if self.at_end() {
            self.is_playing = false;
            self.pending.push((session_id, MediaEvent::Ended));
            debug!(session_id = %session_id, "Playhead reached end");
        }
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<(Uuid, MediaEvent)> {
        std::mem::take(&mut self.pending)
    }

    fn advance(&mut self) {
        let now = Instant::now();
        self.playhead += now.duration_since(self.last_tick).as_secs_f64();
        if let Some(duration) = self.duration {
            self.playhead = self.playhead.min(duration);
        }
        self.last_tick = now;
    }

    fn at_end(&self) -> bool {
        self.duration.is_some_and(|duration| self.playhead >= duration)
    }
}

impl Default for ClockMediaSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaSession for ClockMediaSession {
    fn load(&mut self, session_id: Uuid, url: &str) -> CoreResult<()> {
        self.session_id = Some(session_id);
        self.playhead = 0.0;
        self.is_playing = false;
        self.pending.clear();
        self.duration = read_duration(&source_path(url));

        if let Some(duration) = self.duration {
            self.pending
                .push((session_id, MediaEvent::LoadedMetadata(duration)));
        }

        info!(session_id = %session_id, url, duration = ?self.duration, "Media source loaded");

        Ok(())
    }

    fn play(&mut self) -> CoreResult<()> {
        if self.at_end() {
            self.playhead = 0.0;
        }
        self.is_playing = true;
        self.last_tick = Instant::now();
        Ok(())
    }

    fn pause(&mut self) {
        if self.is_playing {
            self.advance();
        }
        self.is_playing = false;
    }

    fn seek(&mut self, position_seconds: f64) {
        self.playhead = match self.duration {
            Some(duration) => position_seconds.min(duration),
            None => position_seconds,
        };
        self.last_tick = Instant::now();
    }

    fn set_volume(&mut self, volume: f64) {
        debug!(volume, "Volume applied");
    }
}

/// Local path behind a `file://` URL. Anything else is taken as a path.
fn source_path(url: &str) -> PathBuf {
    Url::parse(url)
        .ok()
        .and_then(|url| url.to_file_path().ok())
        .unwrap_or_else(|| PathBuf::from(url))
}

/// Duration in seconds from the MP4 movie header.
fn read_duration(path: &Path) -> Option<f64> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!(path = ?path, error = %e, "No readable source, duration unknown");
            return None;
        }
    };

    let reader = match mp4::read_mp4(file) {
        Ok(reader) => reader,
        Err(e) => {
            warn!(path = ?path, error = %e, "Failed to read MP4 header");
            return None;
        }
    };

    if reader.timescale() == 0 {
        warn!(path = ?path, "MP4 header has no timescale");
        return None;
    }

    Some(reader.duration().as_secs_f64())
}
