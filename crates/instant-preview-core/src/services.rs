//! Collaborator traits the preview core drives.
//!
//! All futures are awaited on the UI thread, so none of them are required to
//! be `Send`.

use crate::{CoreResult, RecordingMetadata};

use std::future::Future;

use uuid::Uuid;

/// Source of every recording known to the application.
pub trait RecordingIndex {
    /// List all recordings as `(path, metadata)` pairs, in index order.
    fn list_recordings(&self) -> impl Future<Output = CoreResult<Vec<(String, RecordingMetadata)>>>;
}

/// File system side effects.
pub trait FileService {
    /// Copy `source` to `destination`.
    fn copy_file_to_path(&self, source: &str, destination: &str)
    -> impl Future<Output = CoreResult<()>>;

    /// Reveal `path` in the OS file browser.
    fn open_file_path(&self, path: &str) -> impl Future<Output = CoreResult<()>>;

    /// Map a local path into a URL the playback surface can load.
    fn resolve_local_file_url(&self, path: &str) -> String;
}

/// Top-level window to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowSpec {
    /// The main application window.
    Main {
        /// Capture target mode to preselect, `None` for the default.
        init_target_mode: Option<String>,
    },
}

/// Window management.
pub trait WindowManager {
    /// Show (or create) a top-level window.
    fn show_window(&self, spec: WindowSpec) -> impl Future<Output = CoreResult<()>>;

    /// Close the window hosting this preview surface.
    fn close_current_window(&self) -> impl Future<Output = CoreResult<()>>;
}

/// Destination picker for exports.
pub trait SavePathPicker {
    /// Ask the user for a destination. `None` means the user cancelled.
    fn save_file_dialog(
        &self,
        suggested_name: &str,
        category: &str,
    ) -> impl Future<Output = Option<String>>;
}

/// Blocking user acknowledgment.
pub trait Notifier {
    /// Show `message` and resolve once the user has dismissed it.
    fn acknowledge(&self, message: &str) -> impl Future<Output = ()>;
}

/// Everything the preview surface needs from its host.
pub trait PreviewServices:
    RecordingIndex + FileService + WindowManager + SavePathPicker + Notifier
{
}

impl<T> PreviewServices for T where
    T: RecordingIndex + FileService + WindowManager + SavePathPicker + Notifier
{
}

/// The underlying media element of the playback surface.
///
/// Transport calls are synchronous; state coming back from the media
/// (position, duration, end of media) is reported as [`MediaEvent`]s.
///
/// [`MediaEvent`]: crate::MediaEvent
pub trait MediaSession {
    /// Point the media at a new source URL.
    ///
    /// Events reported for this source must be tagged with `session_id`.
    fn load(&mut self, session_id: Uuid, url: &str) -> CoreResult<()>;

    /// Begin or resume playback.
    fn play(&mut self) -> CoreResult<()>;

    /// Pause playback.
    fn pause(&mut self);

    /// Seek to an absolute position in seconds.
    fn seek(&mut self, position_seconds: f64);

    /// Apply a volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f64);
}
