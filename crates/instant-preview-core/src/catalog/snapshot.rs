use crate::RecordingEntry;

/// Result of one catalog load.
///
/// An index failure yields an empty snapshot with `load_error` set, so the
/// presentation layer can tell "no recordings" apart from "failed to load".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    entries: Vec<RecordingEntry>,
    load_error: Option<String>,
}

impl CatalogSnapshot {
    /// Snapshot of successfully loaded entries.
    pub fn loaded(entries: Vec<RecordingEntry>) -> Self {
        Self {
            entries,
            load_error: None,
        }
    }

    /// Empty snapshot recording why the load failed.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            load_error: Some(reason.into()),
        }
    }

    /// Entries in index order.
    pub fn entries(&self) -> &[RecordingEntry] {
        &self.entries
    }

    /// Entry with exactly this path.
    pub fn find(&self, path: &str) -> Option<&RecordingEntry> {
        self.entries.iter().find(|entry| entry.path() == path)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Failure message of the load that produced this snapshot.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}
