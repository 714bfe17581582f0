use crate::ClockMediaSession;

use std::{fs, path::Path, thread::sleep, time::Duration};

use instant_preview_core::{MediaEvent, MediaSession};
use url::Url;
use uuid::Uuid;

/// Write an MP4 holding only `ftyp` and a version 0 `moov/mvhd`.
fn write_mp4(path: &Path, timescale: u32, duration: u32) {
    let mut mvhd = Vec::new();
    mvhd.extend_from_slice(&108u32.to_be_bytes());
    mvhd.extend_from_slice(b"mvhd");
    mvhd.extend_from_slice(&[0; 4]); // version, flags
    mvhd.extend_from_slice(&[0; 8]); // creation, modification
    mvhd.extend_from_slice(&timescale.to_be_bytes());
    mvhd.extend_from_slice(&duration.to_be_bytes());
    mvhd.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // rate 1.0
    mvhd.extend_from_slice(&0x0100u16.to_be_bytes()); // volume 1.0
    mvhd.extend_from_slice(&[0; 10]);
    for value in [0x0001_0000u32, 0, 0, 0, 0x0001_0000, 0, 0, 0, 0x4000_0000] {
        mvhd.extend_from_slice(&value.to_be_bytes());
    }
    mvhd.extend_from_slice(&[0; 24]);
    mvhd.extend_from_slice(&2u32.to_be_bytes()); // next track id

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&20u32.to_be_bytes());
    bytes.extend_from_slice(b"ftypisom");
    bytes.extend_from_slice(&0x200u32.to_be_bytes());
    bytes.extend_from_slice(b"isom");
    bytes.extend_from_slice(&(8 + mvhd.len() as u32).to_be_bytes());
    bytes.extend_from_slice(b"moov");
    bytes.extend_from_slice(&mvhd);

    #[allow(clippy::unwrap_used)]
    fs::write(path, bytes).unwrap();
}

#[allow(clippy::unwrap_used)]
fn file_url(path: &Path) -> String {
    Url::from_file_path(path).unwrap().to_string()
}

/// WHAT: The playhead advances only while playing
/// WHY: Position reports drive the transport bar
#[test]
#[allow(clippy::unwrap_used, clippy::panic)]
fn given_playing_clock_when_ticking_then_position_reported() {
    // Given: A loaded clock that is playing
    let session_id = Uuid::new_v4();
    let mut media = ClockMediaSession::new();
    media.load(session_id, "file:///r1/content/output.mp4").unwrap();
    media.play().unwrap();

    // When: Time passes and the clock ticks
    sleep(Duration::from_millis(20));
    media.tick();

    // Then: A positive position is reported for the loaded session
    let events = media.drain_events();
    assert_eq!(events.len(), 1);
    let (reported_session, MediaEvent::TimeUpdate(position)) = events[0] else {
        panic!("expected time update, got {:?}", events[0]);
    };
    assert_eq!(reported_session, session_id);
    assert!(position > 0.0);
}

/// WHAT: A paused clock reports nothing
/// WHY: The transport bar should not move while paused
#[test]
#[allow(clippy::unwrap_used)]
fn given_paused_clock_when_ticking_then_no_events() {
    let mut media = ClockMediaSession::new();
    media.load(Uuid::new_v4(), "file:///r1/content/output.mp4").unwrap();
    media.play().unwrap();
    media.pause();

    media.tick();

    assert!(media.drain_events().is_empty());
}

/// WHAT: Seeking moves the playhead the next report starts from
/// WHY: Scrubbing then playing resumes from the scrubbed position
#[test]
#[allow(clippy::unwrap_used, clippy::panic)]
fn given_seek_when_playing_then_reports_from_new_position() {
    let mut media = ClockMediaSession::new();
    media.load(Uuid::new_v4(), "file:///r1/content/output.mp4").unwrap();
    media.seek(30.0);
    media.play().unwrap();

    media.tick();

    let events = media.drain_events();
    let Some((_, MediaEvent::TimeUpdate(position))) = events.first().copied() else {
        panic!("expected time update");
    };
    assert!(position >= 30.0);
}

/// WHAT: Loading a new source drops queued events
/// WHY: Reports for the old recording must not reach the new one
#[test]
#[allow(clippy::unwrap_used)]
fn given_queued_events_when_loading_then_queue_cleared() {
    let mut media = ClockMediaSession::new();
    media.load(Uuid::new_v4(), "file:///r1/content/output.mp4").unwrap();
    media.play().unwrap();
    media.tick();

    media.load(Uuid::new_v4(), "file:///r2/content/output.mp4").unwrap();

    assert!(media.drain_events().is_empty());
}

/// WHAT: Pausing keeps the time played since the last tick
/// WHY: Each pause would otherwise lose up to one tick interval
#[test]
#[allow(clippy::unwrap_used, clippy::panic)]
fn given_playing_clock_when_paused_between_ticks_then_elapsed_time_kept() {
    // Given: A clock that played for a while without ticking
    let mut media = ClockMediaSession::new();
    media.load(Uuid::new_v4(), "file:///r1/content/output.mp4").unwrap();
    media.play().unwrap();
    sleep(Duration::from_millis(50));

    // When: Pausing, resuming and ticking straight away
    media.pause();
    media.play().unwrap();
    media.tick();

    // Then: The report includes the time played before the pause
    let events = media.drain_events();
    let Some((_, MediaEvent::TimeUpdate(position))) = events.first().copied() else {
        panic!("expected time update, got {events:?}");
    };
    assert!(position >= 0.05);
}

/// WHAT: Loading an MP4 reports its duration
/// WHY: The slider range and the time readout need the length
#[test]
#[allow(clippy::unwrap_used)]
fn given_mp4_source_when_loading_then_duration_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.mp4");
    write_mp4(&path, 1000, 2500);
    let session_id = Uuid::new_v4();
    let mut media = ClockMediaSession::new();

    media.load(session_id, &file_url(&path)).unwrap();

    assert_eq!(
        media.drain_events(),
        vec![(session_id, MediaEvent::LoadedMetadata(2.5))]
    );
}

/// WHAT: Playback stops at the duration and reports the end once
/// WHY: The transport goes idle at the end instead of running on
#[test]
#[allow(clippy::unwrap_used)]
fn given_short_mp4_when_playing_past_end_then_ended_once() {
    // Given: A 10ms source that is playing
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.mp4");
    write_mp4(&path, 1000, 10);
    let session_id = Uuid::new_v4();
    let mut media = ClockMediaSession::new();
    media.load(session_id, &file_url(&path)).unwrap();
    media.drain_events();
    media.play().unwrap();

    // When: Ticking after the end has passed, twice
    sleep(Duration::from_millis(30));
    media.tick();
    let first = media.drain_events();
    media.tick();
    let second = media.drain_events();

    // Then: The position is capped and Ended arrives only once
    assert_eq!(
        first,
        vec![
            (session_id, MediaEvent::TimeUpdate(0.01)),
            (session_id, MediaEvent::Ended),
        ]
    );
    assert!(second.is_empty());
}

/// WHAT: A source that is not an MP4 leaves the duration unknown
/// WHY: Loading must still succeed so playback can run
#[test]
#[allow(clippy::unwrap_used)]
fn given_non_mp4_source_when_loading_then_no_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.mp4");
    fs::write(&path, b"not a movie").unwrap();
    let mut media = ClockMediaSession::new();

    media.load(Uuid::new_v4(), &file_url(&path)).unwrap();

    assert!(media.drain_events().is_empty());
}
