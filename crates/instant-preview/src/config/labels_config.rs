use instant_preview_core::PreviewLabels;
use serde::{Deserialize, Serialize};

/// Resolved user-facing strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// Name of a recording with no name and no usable path segment.
    pub untitled: String,
    /// Base file name suggested when exporting an unnamed recording.
    pub export_fallback: String,
    /// Message shown after a successful export.
    pub export_succeeded: String,
    /// Prefix of the message shown after a failed export.
    pub export_failed: String,
    /// Title of acknowledgment dialogs.
    pub dialog_title: String,
}

impl LabelsConfig {
    /// Strings handed to the preview core.
    pub fn preview_labels(&self) -> PreviewLabels {
        PreviewLabels {
            untitled: self.untitled.clone(),
            export_fallback: self.export_fallback.clone(),
            export_succeeded: self.export_succeeded.clone(),
            export_failed: self.export_failed.clone(),
        }
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        let labels = PreviewLabels::default();
        Self {
            untitled: labels.untitled,
            export_fallback: labels.export_fallback,
            export_succeeded: labels.export_succeeded,
            export_failed: labels.export_failed,
            dialog_title: "Instant Preview".to_string(),
        }
    }
}
