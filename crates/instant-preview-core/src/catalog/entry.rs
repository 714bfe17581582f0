use crate::assets::thumbnail_path;

/// Metadata reported by the recording index for one recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingMetadata {
    /// Capture mode tag, e.g. `"instant"` or `"studio"`.
    pub mode: String,
    /// User-facing name, if one was assigned.
    pub pretty_name: Option<String>,
}

impl RecordingMetadata {
    /// Metadata with a mode and an optional name.
    pub fn new(mode: impl Into<String>, pretty_name: Option<&str>) -> Self {
        Self {
            mode: mode.into(),
            pretty_name: pretty_name.map(str::to_string),
        }
    }
}

/// One row of the instant preview catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingEntry {
    path: String,
    display_name: String,
    thumbnail_ref: String,
}

impl RecordingEntry {
    /// Derive an entry from index data.
    ///
    /// The display name is the pretty name if non-empty, else the final path
    /// segment (split on both `/` and `\`), else `untitled`.
    pub fn from_metadata(path: &str, metadata: &RecordingMetadata, untitled: &str) -> Self {
        let display_name = metadata
            .pretty_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| last_path_segment(path))
            .unwrap_or(untitled)
            .to_string();

        Self {
            path: path.to_string(),
            display_name,
            thumbnail_ref: thumbnail_path(path),
        }
    }

    /// Storage path, the identity of the recording.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Name shown in the list and used for export suggestions.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Local path of the thumbnail screenshot.
    pub fn thumbnail_ref(&self) -> &str {
        &self.thumbnail_ref
    }
}

fn last_path_segment(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\']).next().filter(|s| !s.is_empty())
}
