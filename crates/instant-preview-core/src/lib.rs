//! Instant Preview Core Library
//!
//! Selection, playback and export orchestration for browsing recordings
//! captured in instant mode. Hosts plug in their recording index, file
//! service, window manager, dialogs and media element through the traits in
//! this crate.
//!
//! # Example
//!
//! ```no_run
//! use instant_preview_core::{InstantPreview, MediaSession, PreviewLabels, PreviewServices};
//!
//! async fn run<S: PreviewServices, M: MediaSession>(services: S, media: M) {
//!     let mut preview = InstantPreview::new(
//!         services,
//!         media,
//!         PreviewLabels::default(),
//!         Some("/recordings/demo.cap"),
//!         1.0,
//!     );
//!
//!     preview.reload().await;
//!     preview.toggle_play();
//!     preview.export_current().await;
//!     preview.close().await;
//! }
//! ```

mod assets;
mod catalog;
mod error;
mod labels;
mod playback;
mod preview;
mod sanitize;
mod selection;
mod services;

pub use {
    assets::{
        EXPORT_CATEGORY, INSTANT_MODE, content_asset_path, content_folder_path, thumbnail_path,
    },
    catalog::{CatalogSnapshot, RecordingEntry, RecordingMetadata, load_catalog},
    error::PreviewError,
    error::Result as CoreResult,
    labels::PreviewLabels,
    playback::{MediaEvent, PlaybackController, PlaybackState, TransportPhase, format_time},
    preview::{
        CloseOutcome, ExportOutcome, InstantPreview, OpenFolderOutcome, PreviewEvent,
        ReloadTicket, close_preview, export_recording, open_recording_folder,
    },
    sanitize::sanitize_file_name,
    selection::SelectionState,
    services::{
        FileService, MediaSession, Notifier, PreviewServices, RecordingIndex, SavePathPicker,
        WindowManager, WindowSpec,
    },
};

#[cfg(test)]
mod tests;
