//! Instant Preview: browse, play and export instant-mode recordings.

mod app;
mod clock_media;
mod config;
mod desktop_services;
mod dialogs;
mod error;
mod fs_index;
mod local_files;
mod shell_command;
mod shell_window;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    clock_media::ClockMediaSession,
    desktop_services::DesktopServices,
    dialogs::NativeDialogs,
    error::{AppError, Result as AppResult},
    fs_index::FsRecordingIndex,
    local_files::LocalFileService,
    shell_command::ShellCommand,
    shell_window::ShellWindowManager,
};

use crate::config::Config;

use instant_preview_core::InstantPreview;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "instant_preview=debug,instant_preview_core=debug";

/// Application entry point.
///
/// The first argument is the recording to open, injected by whoever created
/// the preview window.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Config validation failed: {:?}", e);
        std::process::exit(1);
    }

    let initial_path = std::env::args().nth(1);

    // Single-threaded: every preview operation runs on this thread.
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let services = DesktopServices {
        index: FsRecordingIndex::new(&config.storage.recordings_dir),
        files: LocalFileService,
        dialogs: NativeDialogs::new(&config.labels.dialog_title),
        windows: ShellWindowManager::new(config.window.main_app.clone(), shutdown_tx),
    };

    let preview = InstantPreview::new(
        services,
        ClockMediaSession::new(),
        config.labels.preview_labels(),
        initial_path.as_deref(),
        config.playback.initial_volume,
    );

    let app = App {
        preview,
        tick_interval: config.tick_interval(),
    };

    if let Err(e) = rt.block_on(app.run(shutdown_rx)) {
        error!(error = ?e, "App error");
        std::process::exit(1);
    }

    info!("Exited cleanly");
}
