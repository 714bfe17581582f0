//! Side effects acting on the current recording.
//!
//! Collaborator failures are caught here and turned into outcomes; none of
//! them propagate to the presentation layer.

use crate::{
    CatalogSnapshot, CloseOutcome, ExportOutcome, FileService, Notifier, OpenFolderOutcome,
    PreviewLabels, SavePathPicker, SelectionState, WindowManager, WindowSpec,
    assets::{EXPORT_CATEGORY, EXPORT_EXTENSION, content_asset_path, content_folder_path},
    sanitize_file_name,
};

use tracing::{error, info, instrument, warn};

/// Export the current recording's content asset to a user-chosen path.
///
/// The user gets a blocking acknowledgment of success or failure. Picker
/// cancellation is silent.
#[instrument(skip(services, selection, catalog, labels))]
pub async fn export_recording<S>(
    services: &S,
    selection: &SelectionState,
    catalog: &CatalogSnapshot,
    labels: &PreviewLabels,
) -> ExportOutcome
where
    S: SavePathPicker + FileService + Notifier,
{
    let Some(path) = selection.current_path() else {
        return ExportOutcome::NoSelection;
    };

    let raw_name = selection
        .current(catalog)
        .map(|entry| entry.display_name())
        .unwrap_or(labels.export_fallback.as_str());
    let suggested_name = format!("{}{}", sanitize_file_name(raw_name), EXPORT_EXTENSION);

    let Some(destination) = services
        .save_file_dialog(&suggested_name, EXPORT_CATEGORY)
        .await
    else {
        info!(path = %path, "Export cancelled");
        return ExportOutcome::Cancelled;
    };

    let source = content_asset_path(path);
    match services.copy_file_to_path(&source, &destination).await {
        Ok(()) => {
            info!(path = %path, destination = %destination, "Recording exported");
            services.acknowledge(&labels.export_succeeded).await;
            ExportOutcome::Exported { destination }
        }
        Err(e) => {
            error!(path = %path, destination = %destination, error = ?e, "Export failed");
            let reason = e.reason();
            services
                .acknowledge(&format!("{}{}", labels.export_failed, reason))
                .await;
            ExportOutcome::Failed { reason }
        }
    }
}

/// Reveal the current recording's content folder. Failures are logged only.
#[instrument(skip(files, selection))]
pub async fn open_recording_folder<F: FileService>(
    files: &F,
    selection: &SelectionState,
) -> OpenFolderOutcome {
    let Some(path) = selection.current_path() else {
        return OpenFolderOutcome::NoSelection;
    };

    let folder = content_folder_path(path);
    match files.open_file_path(&folder).await {
        Ok(()) => {
            info!(folder = %folder, "Opened recording folder");
            OpenFolderOutcome::Opened
        }
        Err(e) => {
            warn!(folder = %folder, error = ?e, "Failed to open recording folder");
            OpenFolderOutcome::Failed
        }
    }
}

/// Bring back the main window, then close this one.
///
/// The main window is requested first so the user is never left without a
/// visible window. Closing is attempted even if that request fails.
#[instrument(skip(windows))]
pub async fn close_preview<W: WindowManager>(windows: &W) -> CloseOutcome {
    let main_window_shown = match windows
        .show_window(WindowSpec::Main {
            init_target_mode: None,
        })
        .await
    {
        Ok(()) => true,
        Err(e) => {
            warn!(error = ?e, "Failed to show main window, closing anyway");
            false
        }
    };

    let window_closed = match windows.close_current_window().await {
        Ok(()) => true,
        Err(e) => {
            error!(error = ?e, "Failed to close preview window");
            false
        }
    };

    CloseOutcome {
        main_window_shown,
        window_closed,
    }
}
