//! File service over the local filesystem.

use instant_preview_core::{CoreResult, FileService, PreviewError};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, instrument, warn};
use url::Url;

/// Copies, reveals and resolves local files.
#[derive(Debug, Clone, Default)]
pub struct LocalFileService;

impl FileService for LocalFileService {
    #[instrument(skip(self))]
    async fn copy_file_to_path(&self, source: &str, destination: &str) -> CoreResult<()> {
        let bytes = tokio::fs::copy(source, destination).await.map_err(|e| {
            PreviewError::CopyFailed {
                source_path: source.to_string(),
                destination: destination.to_string(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        debug!(bytes, "File copied");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn open_file_path(&self, path: &str) -> CoreResult<()> {
        open::that_detached(path).map_err(|e| PreviewError::OpenFailed {
            path: path.to_string(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// `file://` URL of an absolute path. Relative paths are returned as-is.
    fn resolve_local_file_url(&self, path: &str) -> String {
        match Url::from_file_path(Path::new(path)) {
            Ok(url) => url.to_string(),
            Err(()) => {
                warn!(path, "Cannot express path as a file URL");
                path.to_string()
            }
        }
    }
}
