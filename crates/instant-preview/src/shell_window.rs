//! Window manager for the preview shell.
//!
//! The preview runs in the shell's own terminal session, so closing "this
//! window" ends the shell loop through the shutdown channel.

use instant_preview_core::{CoreResult, PreviewError, WindowManager, WindowSpec};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::sync::watch;
use tracing::{info, instrument};

/// Hands off to the main application and signals shutdown on close.
#[derive(Debug)]
pub struct ShellWindowManager {
    main_app: Option<String>,
    shutdown_tx: watch::Sender<bool>,
}

impl ShellWindowManager {
    /// `main_app` is opened when the main window is requested.
    pub fn new(main_app: Option<String>, shutdown_tx: watch::Sender<bool>) -> Self {
        Self {
            main_app,
            shutdown_tx,
        }
    }
}

impl WindowManager for ShellWindowManager {
    #[instrument(skip(self))]
    async fn show_window(&self, spec: WindowSpec) -> CoreResult<()> {
        let WindowSpec::Main { init_target_mode } = spec;

        let Some(main_app) = &self.main_app else {
            info!(?init_target_mode, "Main window requested, no main app configured");
            return Ok(());
        };

        open::that_detached(main_app).map_err(|e| PreviewError::WindowFailed {
            reason: format!("Failed to open main app {}: {}", main_app, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(main_app = %main_app, ?init_target_mode, "Main window requested");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn close_current_window(&self) -> CoreResult<()> {
        self.shutdown_tx
            .send(true)
            .map_err(|e| PreviewError::WindowFailed {
                reason: format!("Shell loop already gone: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
