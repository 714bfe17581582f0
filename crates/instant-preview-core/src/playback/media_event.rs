/// State reported back by the media session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Periodic elapsed position, in seconds.
    TimeUpdate(f64),
    /// Duration metadata became available, in seconds.
    LoadedMetadata(f64),
    /// Playback reached the natural end of the media.
    Ended,
}
