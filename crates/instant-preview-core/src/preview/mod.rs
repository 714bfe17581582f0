mod actions;
mod event;
mod instant_preview;
mod outcome;

pub use {
    actions::{close_preview, export_recording, open_recording_folder},
    event::PreviewEvent,
    instant_preview::{InstantPreview, ReloadTicket},
    outcome::{CloseOutcome, ExportOutcome, OpenFolderOutcome},
};
