use crate::{
    CoreResult, FileService, MediaSession, Notifier, PreviewError, RecordingIndex,
    RecordingMetadata, SavePathPicker, WindowManager, WindowSpec,
};

use std::{
    cell::{Cell, RefCell},
    panic::Location,
};

use error_location::ErrorLocation;
use uuid::Uuid;

/// Collaborator call, in the order it was issued.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ListRecordings,
    SaveDialog { suggested: String, category: String },
    Copy { source: String, destination: String },
    Open { path: String },
    ShowWindow(WindowSpec),
    ShowWindowResolved,
    CloseWindow,
    Acknowledge(String),
}

/// Scripted host collaborators that record every call.
pub(crate) struct MockServices {
    pub(crate) recordings: Result<Vec<(String, RecordingMetadata)>, String>,
    pub(crate) index_pending: Cell<bool>,
    pub(crate) save_path: Option<String>,
    pub(crate) copy_error: Option<String>,
    pub(crate) open_error: bool,
    pub(crate) show_error: bool,
    pub(crate) close_error: bool,
    pub(crate) calls: RefCell<Vec<Call>>,
}

impl MockServices {
    pub(crate) fn new() -> Self {
        Self {
            recordings: Ok(Vec::new()),
            index_pending: Cell::new(false),
            save_path: None,
            copy_error: None,
            open_error: false,
            show_error: false,
            close_error: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn with_recordings(recordings: &[(&str, &str, Option<&str>)]) -> Self {
        let mut services = Self::new();
        services.recordings = Ok(recordings
            .iter()
            .map(|(path, mode, name)| (path.to_string(), RecordingMetadata::new(*mode, *name)))
            .collect());
        services
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl RecordingIndex for MockServices {
    async fn list_recordings(&self) -> CoreResult<Vec<(String, RecordingMetadata)>> {
        self.record(Call::ListRecordings);
        if self.index_pending.get() {
            std::future::pending::<()>().await;
        }
        self.recordings
            .clone()
            .map_err(|reason| PreviewError::IndexUnavailable {
                reason,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl FileService for MockServices {
    async fn copy_file_to_path(&self, source: &str, destination: &str) -> CoreResult<()> {
        self.record(Call::Copy {
            source: source.to_string(),
            destination: destination.to_string(),
        });
        match &self.copy_error {
            Some(reason) => Err(PreviewError::CopyFailed {
                source_path: source.to_string(),
                destination: destination.to_string(),
                reason: reason.clone(),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }

    async fn open_file_path(&self, path: &str) -> CoreResult<()> {
        self.record(Call::Open {
            path: path.to_string(),
        });
        if self.open_error {
            return Err(PreviewError::OpenFailed {
                path: path.to_string(),
                reason: "no file browser".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    fn resolve_local_file_url(&self, path: &str) -> String {
        format!("asset://localhost{path}")
    }
}

impl WindowManager for MockServices {
    async fn show_window(&self, spec: WindowSpec) -> CoreResult<()> {
        self.record(Call::ShowWindow(spec));
        // Stay pending for one poll so the caller cannot observe it resolved.
        tokio::task::yield_now().await;
        self.record(Call::ShowWindowResolved);
        if self.show_error {
            return Err(PreviewError::WindowFailed {
                reason: "main window unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    async fn close_current_window(&self) -> CoreResult<()> {
        self.record(Call::CloseWindow);
        if self.close_error {
            return Err(PreviewError::WindowFailed {
                reason: "close refused".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

impl SavePathPicker for MockServices {
    async fn save_file_dialog(&self, suggested_name: &str, category: &str) -> Option<String> {
        self.record(Call::SaveDialog {
            suggested: suggested_name.to_string(),
            category: category.to_string(),
        });
        self.save_path.clone()
    }
}

impl Notifier for MockServices {
    async fn acknowledge(&self, message: &str) {
        self.record(Call::Acknowledge(message.to_string()));
    }
}

/// Transport command received by the mock media element.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MediaCall {
    Load(String),
    Play,
    Pause,
    Seek(f64),
    SetVolume(f64),
}

/// Media element that records transport commands.
#[derive(Default)]
pub(crate) struct MockMedia {
    pub(crate) calls: Vec<MediaCall>,
    pub(crate) fail_play: bool,
    pub(crate) fail_load: bool,
}

impl MediaSession for MockMedia {
    fn load(&mut self, _session_id: Uuid, url: &str) -> CoreResult<()> {
        self.calls.push(MediaCall::Load(url.to_string()));
        if self.fail_load {
            return Err(PreviewError::MediaFailed {
                reason: "unsupported source".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    fn play(&mut self) -> CoreResult<()> {
        if self.fail_play {
            return Err(PreviewError::MediaFailed {
                reason: "autoplay blocked".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.calls.push(MediaCall::Play);
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(MediaCall::Pause);
    }

    fn seek(&mut self, position_seconds: f64) {
        self.calls.push(MediaCall::Seek(position_seconds));
    }

    fn set_volume(&mut self, volume: f64) {
        self.calls.push(MediaCall::SetVolume(volume));
    }
}
