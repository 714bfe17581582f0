//! Native save and message dialogs.

use instant_preview_core::{Notifier, SavePathPicker};

use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};
use tracing::{debug, instrument};

const VIDEO_EXTENSIONS: &[&str] = &["mp4"];
const IMAGE_EXTENSIONS: &[&str] = &["png"];

/// Save dialog filters by export category.
fn category_filter(category: &str) -> Option<(&'static str, &'static [&'static str])> {
    match category {
        "recording" => Some(("MP4 Video", VIDEO_EXTENSIONS)),
        "screenshot" => Some(("PNG Image", IMAGE_EXTENSIONS)),
        _ => None,
    }
}

/// Save-path picker and acknowledgment dialogs.
#[derive(Debug, Clone)]
pub struct NativeDialogs {
    title: String,
}

impl NativeDialogs {
    /// Dialogs titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl SavePathPicker for NativeDialogs {
    #[instrument(skip(self))]
    async fn save_file_dialog(&self, suggested_name: &str, category: &str) -> Option<String> {
        let mut dialog = AsyncFileDialog::new()
            .set_title(&self.title)
            .set_file_name(suggested_name);

        if let Some((label, extensions)) = category_filter(category) {
            dialog = dialog.add_filter(label, extensions);
        }

        let handle = dialog.save_file().await?;
        let destination = handle.path().to_string_lossy().into_owned();

        debug!(destination = %destination, "Save destination chosen");

        Some(destination)
    }
}

impl Notifier for NativeDialogs {
    async fn acknowledge(&self, message: &str) {
        let _ = AsyncMessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(&self.title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show()
            .await;
    }
}
