//! Which recording is current, and what derives from it.

use crate::{CatalogSnapshot, FileService, RecordingEntry, assets::content_asset_path};

/// Path of the active recording.
///
/// The path need not be present in the catalog: a path injected at window
/// creation, or one whose entry disappeared on reload, still yields a media
/// URL while [`SelectionState::current`] returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current_path: Option<String>,
}

impl SelectionState {
    /// Seed the selection with the path injected at window creation.
    pub fn new(initial_path: Option<&str>) -> Self {
        Self {
            current_path: initial_path.filter(|p| !p.is_empty()).map(str::to_string),
        }
    }

    /// Make `path` the current recording. An empty path clears the selection.
    pub fn select(&mut self, path: &str) {
        self.current_path = (!path.is_empty()).then(|| path.to_string());
    }

    /// Path of the current recording, if any.
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    /// Whether `path` is the current recording.
    pub fn is_selected(&self, path: &str) -> bool {
        self.current_path.as_deref() == Some(path)
    }

    /// Catalog entry of the current recording.
    pub fn current<'a>(&self, catalog: &'a CatalogSnapshot) -> Option<&'a RecordingEntry> {
        self.current_path().and_then(|path| catalog.find(path))
    }

    /// Playable URL of the current recording's content asset, or an empty
    /// string when nothing is selected.
    pub fn media_url<F: FileService>(&self, files: &F) -> String {
        self.current_path()
            .map(|path| files.resolve_local_file_url(&content_asset_path(path)))
            .unwrap_or_default()
    }
}
