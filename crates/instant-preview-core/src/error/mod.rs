use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Preview errors with source location tracking.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// The recording index could not be listed.
    #[error("Recording index unavailable: {reason} {location}")]
    IndexUnavailable {
        /// Description of the index failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Copying a recording to its export destination failed.
    #[error("Failed to copy {source_path} to {destination}: {reason} {location}")]
    CopyFailed {
        /// Content asset being copied.
        source_path: String,
        /// User-chosen destination.
        destination: String,
        /// Description of the copy failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Revealing a path in the OS file browser failed.
    #[error("Failed to open {path}: {reason} {location}")]
    OpenFailed {
        /// Path that could not be opened.
        path: String,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A window manager request failed.
    #[error("Window request failed: {reason} {location}")]
    WindowFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The media session rejected a transport command.
    #[error("Media session error: {reason} {location}")]
    MediaFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// IO error from a collaborator.
    #[error("IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for PreviewError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        PreviewError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl PreviewError {
    /// Failure detail fit for the user, without the source location.
    pub fn reason(&self) -> String {
        match self {
            PreviewError::IndexUnavailable { reason, .. }
            | PreviewError::CopyFailed { reason, .. }
            | PreviewError::OpenFailed { reason, .. }
            | PreviewError::WindowFailed { reason, .. }
            | PreviewError::MediaFailed { reason, .. } => reason.clone(),
            PreviewError::Io { source, .. } => source.to_string(),
        }
    }
}

/// Result type alias using [`PreviewError`].
pub type Result<T> = std::result::Result<T, PreviewError>;
