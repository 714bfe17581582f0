use crate::{AppResult, ClockMediaSession, DesktopServices, ShellCommand};

use std::time::Duration;

use instant_preview_core::{
    ExportOutcome, InstantPreview, OpenFolderOutcome, PreviewEvent, format_time,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::{broadcast, watch},
};
use tracing::{debug, error, info, instrument, trace, warn};

/// Terminal shell hosting one instant preview.
///
/// Runs entirely on the current thread: stdin commands, media ticks and
/// change notifications are multiplexed with `select!`.
pub struct App {
    pub(crate) preview: InstantPreview<DesktopServices, ClockMediaSession>,
    pub(crate) tick_interval: Duration,
}

impl App {
    /// Run until the preview window closes or stdin ends.
    #[instrument(skip(self, shutdown_rx))]
    pub(crate) async fn run(mut self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        info!("Instant preview starting");

        let mut events = self.preview.subscribe();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut ticker = tokio::time::interval(self.tick_interval);

        self.preview.reload().await;
        self.print_catalog();
        println!("{}", ShellCommand::USAGE);

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Preview window closed");
                    break;
                }

                line = lines.next_line() => {
                    match line? {
                        Some(line) => self.handle_line(&line).await,
                        None => {
                            info!("Input closed, closing preview");
                            self.preview.close().await;
                            break;
                        }
                    }
                }

                _ = ticker.tick() => self.pump_media(),

                event = events.recv() => self.log_event(event),
            }
        }

        info!("Instant preview shut down");

        Ok(())
    }

    async fn handle_line(&mut self, line: &str) {
        let command = match ShellCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return,
            Err(e) => {
                warn!(error = %e, "Rejected command");
                println!("{}", ShellCommand::USAGE);
                return;
            }
        };

        debug!(?command, "Shell command");

        match command {
            ShellCommand::List => self.print_catalog(),
            ShellCommand::Select(target) => {
                let path = self.resolve_target(&target);
                self.preview.select_recording(&path);
                self.print_status();
            }
            ShellCommand::Play => {
                self.preview.toggle_play();
                self.print_status();
            }
            ShellCommand::Seek(seconds) => {
                self.preview.seek(seconds);
                self.print_status();
            }
            ShellCommand::Volume(volume) => {
                self.preview.set_volume(volume);
                self.print_status();
            }
            ShellCommand::Export => match self.preview.export_current().await {
                ExportOutcome::NoSelection => println!("nothing selected"),
                ExportOutcome::PreviewClosed => println!("preview closed"),
                ExportOutcome::Cancelled => println!("export cancelled"),
                ExportOutcome::Exported { destination } => println!("exported to {destination}"),
                ExportOutcome::Failed { reason } => println!("export failed: {reason}"),
            },
            ShellCommand::Open => match self.preview.open_current_folder().await {
                OpenFolderOutcome::NoSelection => println!("nothing selected"),
                OpenFolderOutcome::PreviewClosed => println!("preview closed"),
                OpenFolderOutcome::Opened | OpenFolderOutcome::Failed => {}
            },
            ShellCommand::Reload => {
                self.preview.reload().await;
                self.print_catalog();
            }
            ShellCommand::Status => self.print_status(),
            ShellCommand::Close => {
                let outcome = self.preview.close().await;
                if !outcome.window_closed {
                    error!("Preview window did not close");
                }
            }
            ShellCommand::Help => println!("{}", ShellCommand::USAGE),
        }
    }

    /// A 1-based catalog index, or a path taken verbatim.
    fn resolve_target(&self, target: &str) -> String {
        target
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.preview.catalog().entries().get(i))
            .map(|entry| entry.path().to_string())
            .unwrap_or_else(|| target.to_string())
    }

    fn pump_media(&mut self) {
        let media = self.preview.media_mut();
        media.tick();
        let events = media.drain_events();
        for (session_id, event) in events {
            self.preview.handle_media_event(session_id, event);
        }
    }

    fn log_event(&self, event: Result<PreviewEvent, broadcast::error::RecvError>) {
        match event {
            Ok(PreviewEvent::PlaybackChanged(state)) => trace!(?state, "Playback changed"),
            Ok(event) => debug!(?event, "Preview changed"),
            Err(e) => debug!(error = %e, "Change notifications lagged"),
        }
    }

    fn print_catalog(&self) {
        let catalog = self.preview.catalog();

        if let Some(reason) = catalog.load_error() {
            println!("could not load recordings: {reason}");
        } else if catalog.is_empty() {
            println!("no instant recordings");
        }

        for (i, entry) in catalog.entries().iter().enumerate() {
            let marker = if self.preview.selection().is_selected(entry.path()) {
                '*'
            } else {
                ' '
            };
            println!(
                "{marker} {:>3}  {}  {}",
                i + 1,
                entry.display_name(),
                self.preview.thumbnail_url(entry)
            );
        }
    }

    fn print_status(&self) {
        let state = self.preview.playback_state();
        let name = self
            .preview
            .current()
            .map(|entry| entry.display_name().to_string())
            .or_else(|| self.preview.selection().current_path().map(str::to_string))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{name}  {:?}  {} / {}  vol {:.1}  {}",
            self.preview.playback().phase(),
            format_time(state.position_seconds),
            format_time(state.duration_seconds),
            state.volume,
            self.preview.media_url()
        );
    }
}
