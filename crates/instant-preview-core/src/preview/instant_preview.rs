use crate::{
    CatalogSnapshot, CloseOutcome, ExportOutcome, MediaEvent, MediaSession, OpenFolderOutcome,
    PlaybackController, PlaybackState, PreviewEvent, PreviewLabels, PreviewServices,
    RecordingEntry, SelectionState, load_catalog,
    preview::{close_preview, export_recording, open_recording_folder},
};

use std::cell::Cell;

use tokio::sync::broadcast;
use tracing::{debug, info, instrument};
use uuid::Uuid;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Permission to apply one catalog load.
///
/// Only the most recently issued ticket is honoured, and only while the
/// preview is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTicket(u64);

/// Releases the in-flight slot if a load is abandoned before it finishes.
struct InFlightGuard<'a> {
    slot: &'a Cell<Option<u64>>,
    ticket: u64,
}

impl InFlightGuard<'_> {
    fn disarm(self) {
        std::mem::forget(self);
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.slot.get() == Some(self.ticket) {
            debug!(ticket = self.ticket, "Catalog load abandoned");
            self.slot.set(None);
        }
    }
}

/// The instant preview surface: catalog, selection, playback and actions.
///
/// Every mutation publishes a [`PreviewEvent`] on the channel returned by
/// [`InstantPreview::subscribe`].
pub struct InstantPreview<S, M> {
    services: S,
    labels: PreviewLabels,
    catalog: CatalogSnapshot,
    selection: SelectionState,
    playback: PlaybackController<M>,
    reload_in_flight: Cell<Option<u64>>,
    next_reload: u64,
    closed: bool,
    events: broadcast::Sender<PreviewEvent>,
}

impl<S: PreviewServices, M: MediaSession> InstantPreview<S, M> {
    /// Create the preview with the path injected at window creation.
    ///
    /// The catalog starts empty; call [`InstantPreview::reload`] to load it.
    #[instrument(skip(services, media, labels))]
    pub fn new(
        services: S,
        media: M,
        labels: PreviewLabels,
        initial_path: Option<&str>,
        initial_volume: f64,
    ) -> Self {
        let selection = SelectionState::new(initial_path);
        let mut playback = PlaybackController::new(media, initial_volume);
        playback.load_source(&selection.media_url(&services));
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        info!(initial_path = ?selection.current_path(), "Instant preview created");

        Self {
            services,
            labels,
            catalog: CatalogSnapshot::default(),
            selection,
            playback,
            reload_in_flight: Cell::new(None),
            next_reload: 0,
            closed: false,
            events,
        }
    }

    /// Receive change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<PreviewEvent> {
        self.events.subscribe()
    }

    /// Host collaborators.
    pub fn services(&self) -> &S {
        &self.services
    }

    /// Latest catalog snapshot.
    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Catalog entry of the current recording.
    pub fn current(&self) -> Option<&RecordingEntry> {
        self.selection.current(&self.catalog)
    }

    /// Playable URL of the current recording, empty when none is selected.
    pub fn media_url(&self) -> String {
        self.selection.media_url(&self.services)
    }

    /// Loadable URL of an entry's thumbnail.
    pub fn thumbnail_url(&self, entry: &RecordingEntry) -> String {
        self.services.resolve_local_file_url(entry.thumbnail_ref())
    }

    /// Transport state.
    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    /// The playback controller.
    pub fn playback(&self) -> &PlaybackController<M> {
        &self.playback
    }

    /// The owned media session, for hosts that pump its events.
    pub fn media_mut(&mut self) -> &mut M {
        self.playback.media_mut()
    }

    /// Whether the preview window has closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Start a catalog load. Returns `None` while another load is in flight
    /// or after the preview closed.
    pub fn begin_reload(&mut self) -> Option<ReloadTicket> {
        if self.closed {
            debug!("Preview closed, not reloading catalog");
            return None;
        }
        if self.reload_in_flight.get().is_some() {
            debug!("Catalog load already in flight, ignoring reload");
            return None;
        }

        let ticket = self.next_reload;
        self.next_reload += 1;
        self.reload_in_flight.set(Some(ticket));
        Some(ReloadTicket(ticket))
    }

    /// Load a catalog snapshot without applying it.
    pub async fn fetch_catalog(&self) -> CatalogSnapshot {
        load_catalog(&self.services, &self.labels.untitled).await
    }

    /// Apply a loaded snapshot. Results for an outstanding ticket arriving
    /// after close, or for a superseded ticket, are dropped.
    #[instrument(skip(self, snapshot))]
    pub fn finish_reload(&mut self, ticket: ReloadTicket, snapshot: CatalogSnapshot) -> bool {
        if self.reload_in_flight.get() != Some(ticket.0) {
            debug!(ticket = ticket.0, "Dropping catalog load for superseded ticket");
            return false;
        }
        self.reload_in_flight.set(None);

        if self.closed {
            debug!(ticket = ticket.0, "Dropping catalog load after close");
            return false;
        }

        self.catalog = snapshot;
        self.publish(PreviewEvent::CatalogLoaded {
            count: self.catalog.len(),
            failed: self.catalog.load_error().is_some(),
        });
        true
    }

    /// Load and apply the catalog. Returns whether a snapshot was applied.
    ///
    /// Dropping the returned future mid-load releases the in-flight slot, so
    /// a later reload can start.
    pub async fn reload(&mut self) -> bool {
        let Some(ticket) = self.begin_reload() else {
            return false;
        };
        let guard = InFlightGuard {
            slot: &self.reload_in_flight,
            ticket: ticket.0,
        };
        let snapshot = self.fetch_catalog().await;
        guard.disarm();
        self.finish_reload(ticket, snapshot)
    }

    /// Make `path` current and reset transport to idle at zero.
    #[instrument(skip(self))]
    pub fn select_recording(&mut self, path: &str) {
        if !self.is_open("select") {
            return;
        }

        self.selection.select(path);
        let url = self.selection.media_url(&self.services);
        let session_id = self.playback.load_source(&url);

        info!(path = %path, session_id = %session_id, "Recording selected");

        self.publish(PreviewEvent::SelectionChanged {
            path: self.selection.current_path().map(str::to_string),
        });
        self.publish_playback();
    }

    /// Flip between playing and paused.
    pub fn toggle_play(&mut self) {
        if !self.is_open("toggle_play") {
            return;
        }
        self.playback.toggle_play();
        self.publish_playback();
    }

    /// Scrub to `position_seconds`.
    pub fn seek(&mut self, position_seconds: f64) {
        if !self.is_open("seek") {
            return;
        }
        self.playback.seek(position_seconds);
        self.publish_playback();
    }

    /// Change the volume; out-of-range values are ignored.
    pub fn set_volume(&mut self, volume: f64) {
        if !self.is_open("set_volume") {
            return;
        }
        if self.playback.set_volume(volume) {
            self.publish_playback();
        }
    }

    /// Feed a media-reported update back into the transport state.
    pub fn handle_media_event(&mut self, session_id: Uuid, event: MediaEvent) {
        if self.closed {
            return;
        }
        if self.playback.handle_media_event(session_id, event) {
            self.publish_playback();
        }
    }

    /// Export the current recording.
    pub async fn export_current(&self) -> ExportOutcome {
        if !self.is_open("export") {
            return ExportOutcome::PreviewClosed;
        }
        export_recording(&self.services, &self.selection, &self.catalog, &self.labels).await
    }

    /// Reveal the current recording's folder.
    pub async fn open_current_folder(&self) -> OpenFolderOutcome {
        if !self.is_open("open_folder") {
            return OpenFolderOutcome::PreviewClosed;
        }
        open_recording_folder(&self.services, &self.selection).await
    }

    /// Restore the main window and close this one. The selection is kept.
    #[instrument(skip(self))]
    pub async fn close(&mut self) -> CloseOutcome {
        // Stale loads completing while the window goes away must not apply.
        self.closed = true;
        let outcome = close_preview(&self.services).await;
        self.closed = outcome.window_closed;

        if self.closed {
            info!("Instant preview closed");
            self.publish(PreviewEvent::Closed);
        }

        outcome
    }

    fn is_open(&self, intent: &str) -> bool {
        if self.closed {
            debug!(intent, "Preview closed, ignoring intent");
        }
        !self.closed
    }

    fn publish_playback(&self) {
        self.publish(PreviewEvent::PlaybackChanged(self.playback.state()));
    }

    fn publish(&self, event: PreviewEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
