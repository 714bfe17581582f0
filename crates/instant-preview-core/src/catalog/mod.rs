mod entry;
mod loader;
mod snapshot;

pub use {
    entry::{RecordingEntry, RecordingMetadata},
    loader::load_catalog,
    snapshot::CatalogSnapshot,
};
