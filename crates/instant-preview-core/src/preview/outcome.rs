/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing was selected; no dialog was shown.
    NoSelection,
    /// The preview window is closed; nothing was attempted.
    PreviewClosed,
    /// The user dismissed the save dialog.
    Cancelled,
    /// The content asset was copied.
    Exported {
        /// Destination chosen by the user.
        destination: String,
    },
    /// The copy failed. The user was shown `reason`.
    Failed {
        /// Error detail surfaced to the user.
        reason: String,
    },
}

/// Result of a reveal-folder request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenFolderOutcome {
    /// Nothing was selected.
    NoSelection,
    /// The preview window is closed; nothing was attempted.
    PreviewClosed,
    /// The folder open request was accepted.
    Opened,
    /// The file service reported a failure, which was logged.
    Failed,
}

/// Result of the two close steps. Both are always attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseOutcome {
    /// Whether the main window request succeeded.
    pub main_window_shown: bool,
    /// Whether this window was closed.
    pub window_closed: bool,
}
