use crate::{
    CatalogSnapshot, RecordingEntry, RecordingIndex,
    assets::INSTANT_MODE,
};

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

/// Load the instant-mode catalog from the recording index.
///
/// Recordings of every other capture mode are excluded. Index order is kept
/// and a path seen twice keeps its first occurrence. An index failure is
/// logged and degrades to an empty snapshot carrying the error message.
#[instrument(skip(index))]
pub async fn load_catalog<I: RecordingIndex>(index: &I, untitled: &str) -> CatalogSnapshot {
    let recordings = match index.list_recordings().await {
        Ok(recordings) => recordings,
        Err(e) => {
            warn!(error = ?e, "Failed to list recordings");
            return CatalogSnapshot::failed(e.to_string());
        }
    };

    let total = recordings.len();
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for (path, metadata) in recordings {
        if metadata.mode != INSTANT_MODE {
            debug!(path = %path, mode = %metadata.mode, "Skipping recording");
            continue;
        }

        if !seen.insert(path.clone()) {
            warn!(path = %path, "Duplicate recording path in index, keeping first");
            continue;
        }

        entries.push(RecordingEntry::from_metadata(&path, &metadata, untitled));
    }

    info!(total, instant = entries.len(), "Catalog loaded");

    CatalogSnapshot::loaded(entries)
}
