//! The collaborators the shell hands to the preview core.

use crate::{FsRecordingIndex, LocalFileService, NativeDialogs, ShellWindowManager};

use instant_preview_core::{
    CoreResult, FileService, Notifier, RecordingIndex, RecordingMetadata, SavePathPicker,
    WindowManager, WindowSpec,
};

/// Filesystem index, local files, native dialogs and the shell window.
pub struct DesktopServices {
    pub(crate) index: FsRecordingIndex,
    pub(crate) files: LocalFileService,
    pub(crate) dialogs: NativeDialogs,
    pub(crate) windows: ShellWindowManager,
}

impl RecordingIndex for DesktopServices {
    async fn list_recordings(&self) -> CoreResult<Vec<(String, RecordingMetadata)>> {
        self.index.list_recordings().await
    }
}

impl FileService for DesktopServices {
    async fn copy_file_to_path(&self, source: &str, destination: &str) -> CoreResult<()> {
        self.files.copy_file_to_path(source, destination).await
    }

    async fn open_file_path(&self, path: &str) -> CoreResult<()> {
        self.files.open_file_path(path).await
    }

    fn resolve_local_file_url(&self, path: &str) -> String {
        self.files.resolve_local_file_url(path)
    }
}

impl WindowManager for DesktopServices {
    async fn show_window(&self, spec: WindowSpec) -> CoreResult<()> {
        self.windows.show_window(spec).await
    }

    async fn close_current_window(&self) -> CoreResult<()> {
        self.windows.close_current_window().await
    }
}

impl SavePathPicker for DesktopServices {
    async fn save_file_dialog(&self, suggested_name: &str, category: &str) -> Option<String> {
        self.dialogs.save_file_dialog(suggested_name, category).await
    }
}

impl Notifier for DesktopServices {
    async fn acknowledge(&self, message: &str) {
        self.dialogs.acknowledge(message).await;
    }
}
