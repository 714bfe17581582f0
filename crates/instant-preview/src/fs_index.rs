//! Recording index backed by the recordings directory.
//!
//! Each recording is a directory containing a `recording-meta.json` file.
//! Directories without one are not recordings and are skipped, as are
//! entries that cannot be read.

use instant_preview_core::{CoreResult, PreviewError, RecordingIndex, RecordingMetadata};

use std::{
    io::ErrorKind,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

const META_FILE: &str = "recording-meta.json";

/// On-disk metadata of one recording.
#[derive(Debug, Deserialize)]
struct RecordingMetaFile {
    mode: String,
    #[serde(default)]
    pretty_name: Option<String>,
}

/// Lists recordings found under a directory.
#[derive(Debug, Clone)]
pub struct FsRecordingIndex {
    recordings_dir: PathBuf,
}

impl FsRecordingIndex {
    /// Index the recordings stored under `recordings_dir`.
    pub fn new(recordings_dir: impl Into<PathBuf>) -> Self {
        Self {
            recordings_dir: recordings_dir.into(),
        }
    }

    async fn read_metadata(recording_dir: &Path) -> Option<RecordingMetadata> {
        let meta_path = recording_dir.join(META_FILE);

        let contents = match tokio::fs::read_to_string(&meta_path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(dir = ?recording_dir, "No recording metadata, skipping");
                return None;
            }
            Err(e) => {
                warn!(meta_path = ?meta_path, error = ?e, "Failed to read recording metadata");
                return None;
            }
        };

        match serde_json::from_str::<RecordingMetaFile>(&contents) {
            Ok(meta) => Some(RecordingMetadata {
                mode: meta.mode,
                pretty_name: meta.pretty_name,
            }),
            Err(e) => {
                warn!(meta_path = ?meta_path, error = %e, "Malformed recording metadata");
                None
            }
        }
    }
}

impl RecordingIndex for FsRecordingIndex {
    /// Recordings sorted by path.
    #[instrument(skip(self), fields(recordings_dir = ?self.recordings_dir))]
    async fn list_recordings(&self) -> CoreResult<Vec<(String, RecordingMetadata)>> {
        let mut dir = tokio::fs::read_dir(&self.recordings_dir).await.map_err(|e| {
            PreviewError::IndexUnavailable {
                reason: format!("Failed to read {:?}: {}", self.recordings_dir, e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let mut recordings = Vec::new();
        loop {
            let entry = match dir.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!(error = ?e, "Failed to read directory entry, stopping scan");
                    break;
                }
            };
            let path = entry.path();

            // Follows symlinks, so linked recording directories are kept.
            match tokio::fs::metadata(&path).await {
                Ok(metadata) if metadata.is_dir() => {}
                Ok(_) => continue,
                Err(e) => {
                    warn!(path = ?path, error = ?e, "Failed to stat entry, skipping");
                    continue;
                }
            }

            if let Some(metadata) = Self::read_metadata(&path).await {
                recordings.push((path.to_string_lossy().into_owned(), metadata));
            }
        }

        recordings.sort_by(|a, b| a.0.cmp(&b.0));

        info!(count = recordings.len(), "Recordings listed");

        Ok(recordings)
    }
}
