use crate::PlaybackState;

/// Change notification published after every state mutation.
///
/// Subscribers recompute whatever they display from the preview's read
/// accessors.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewEvent {
    /// A catalog load was applied.
    CatalogLoaded {
        /// Number of entries in the new snapshot.
        count: usize,
        /// Whether the index failed and the catalog degraded to empty.
        failed: bool,
    },
    /// The current recording changed.
    SelectionChanged {
        /// New current path, `None` when cleared.
        path: Option<String>,
    },
    /// Transport state changed.
    PlaybackChanged(PlaybackState),
    /// The preview window closed.
    Closed,
}
