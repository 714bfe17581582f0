use crate::{RecordingEntry, RecordingMetadata, load_catalog, tests::mocks::MockServices};

const UNTITLED: &str = "Untitled";

/// WHAT: Only instant-mode recordings enter the catalog
/// WHY: Other capture modes belong to a different flow
#[tokio::test]
async fn given_mixed_modes_when_loading_then_only_instant_entries_kept() {
    // Given: An instant recording and a screen recording
    let services = MockServices::with_recordings(&[
        ("/r1", "instant", Some("Demo")),
        ("/r2", "screen", Some("X")),
    ]);

    // When: Loading the catalog
    let catalog = load_catalog(&services, UNTITLED).await;

    // Then: Exactly the instant entry remains
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].path(), "/r1");
    assert_eq!(catalog.entries()[0].display_name(), "Demo");
    assert!(catalog.load_error().is_none());
}

/// WHAT: Index order is preserved
/// WHY: The index already sorts recordings the way the user expects
#[tokio::test]
async fn given_interleaved_modes_when_loading_then_relative_order_kept() {
    // Given: Instant recordings interleaved with studio ones
    let services = MockServices::with_recordings(&[
        ("/c", "instant", None),
        ("/x", "studio", None),
        ("/a", "instant", None),
        ("/y", "studio", None),
        ("/b", "instant", None),
    ]);

    // When: Loading the catalog
    let catalog = load_catalog(&services, UNTITLED).await;

    // Then: Instant entries appear in original relative order
    let paths: Vec<&str> = catalog.entries().iter().map(|e| e.path()).collect();
    assert_eq!(paths, ["/c", "/a", "/b"]);
}

/// WHAT: Index failure degrades to an empty catalog with an error status
/// WHY: The screen shows an empty state, not an error state
#[tokio::test]
async fn given_failing_index_when_loading_then_empty_catalog_with_error() {
    // Given: An index that fails
    let mut services = MockServices::new();
    services.recordings = Err("daemon not running".to_string());

    // When: Loading the catalog
    let catalog = load_catalog(&services, UNTITLED).await;

    // Then: No entries, error message retained
    assert!(catalog.is_empty());
    assert!(catalog.load_error().is_some_and(|e| e.contains("daemon not running")));
}

/// WHAT: A path listed twice appears once
/// WHY: Entry paths are catalog identities and must be unique
#[tokio::test]
async fn given_duplicate_paths_when_loading_then_first_occurrence_kept() {
    let services = MockServices::with_recordings(&[
        ("/r1", "instant", Some("First")),
        ("/r1", "instant", Some("Second")),
    ]);

    let catalog = load_catalog(&services, UNTITLED).await;

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].display_name(), "First");
}

/// WHAT: Display name falls back to the last path segment, then untitled
/// WHY: Recordings without a pretty name still need a readable label
#[test]
fn given_missing_pretty_name_when_deriving_entry_then_falls_back() {
    let unnamed = RecordingMetadata::new("instant", None);
    let empty_name = RecordingMetadata::new("instant", Some(""));

    let unix = RecordingEntry::from_metadata("/home/me/rec/2024-01-01.cap", &unnamed, UNTITLED);
    let windows =
        RecordingEntry::from_metadata(r"C:\Users\me\rec\clip.cap", &empty_name, UNTITLED);
    let trailing = RecordingEntry::from_metadata("/home/me/rec/", &unnamed, UNTITLED);

    assert_eq!(unix.display_name(), "2024-01-01.cap");
    assert_eq!(windows.display_name(), "clip.cap");
    assert_eq!(trailing.display_name(), UNTITLED);
}

/// WHAT: Thumbnail reference points at the display screenshot
/// WHY: The list shows the screenshot captured with the recording
#[test]
fn given_entry_when_deriving_then_thumbnail_under_screenshots() {
    let entry = RecordingEntry::from_metadata(
        "/r1",
        &RecordingMetadata::new("instant", Some("Demo")),
        UNTITLED,
    );

    assert_eq!(entry.thumbnail_ref(), "/r1/screenshots/display.jpg");
}
