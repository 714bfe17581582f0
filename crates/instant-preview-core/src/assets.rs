//! Conventional asset locations inside a recording's storage directory.

/// Capture mode tag of recordings eligible for instant preview.
pub const INSTANT_MODE: &str = "instant";

/// Save dialog category used when exporting a recording.
pub const EXPORT_CATEGORY: &str = "recording";

/// Extension appended to exported file names.
pub const EXPORT_EXTENSION: &str = ".mp4";

const CONTENT_DIR: &str = "content";
const CONTENT_FILE: &str = "output.mp4";
const THUMBNAIL_FILE: &str = "screenshots/display.jpg";

/// Directory holding the playable content of a recording.
pub fn content_folder_path(recording_path: &str) -> String {
    format!("{recording_path}/{CONTENT_DIR}")
}

/// Primary playable media file of a recording.
pub fn content_asset_path(recording_path: &str) -> String {
    format!("{recording_path}/{CONTENT_DIR}/{CONTENT_FILE}")
}

/// Screenshot used as the list thumbnail. Not guaranteed to exist.
pub fn thumbnail_path(recording_path: &str) -> String {
    format!("{recording_path}/{THUMBNAIL_FILE}")
}
