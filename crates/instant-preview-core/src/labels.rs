/// User-facing strings the core needs to produce.
///
/// Lookup of localized text happens in the presentation layer; the core
/// only receives the resolved strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLabels {
    /// Display name for a recording with no name and no usable path segment.
    pub untitled: String,
    /// Base file name suggested when exporting a recording with no name.
    pub export_fallback: String,
    /// Acknowledgment shown after a successful export.
    pub export_succeeded: String,
    /// Prefix of the acknowledgment shown after a failed export.
    pub export_failed: String,
}

impl Default for PreviewLabels {
    fn default() -> Self {
        Self {
            untitled: "Untitled".to_string(),
            export_fallback: "Recording".to_string(),
            export_succeeded: "Export succeeded!".to_string(),
            export_failed: "Export failed: ".to_string(),
        }
    }
}
