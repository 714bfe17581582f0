use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Intents typed into the preview shell, one per line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Print the catalog.
    List,
    /// Make a recording current, by catalog index or path.
    Select(String),
    /// Toggle play/pause.
    Play,
    /// Scrub to a position in seconds.
    Seek(f64),
    /// Set the volume in `[0, 1]`.
    Volume(f64),
    /// Export the current recording.
    Export,
    /// Reveal the current recording's folder.
    Open,
    /// Reload the catalog.
    Reload,
    /// Print transport state.
    Status,
    /// Return to the main window and exit.
    Close,
    /// Print the command list.
    Help,
}

impl ShellCommand {
    /// Usage shown by `help` and after an unknown command.
    pub const USAGE: &'static str = "commands: list | select <n|path> | play | seek <secs> | \
volume <0-1> | export | open | reload | status | close | help";

    /// Parse one input line. Blank lines yield `None`.
    #[track_caller]
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => ShellCommand::List,
            "select" | "sel" => {
                if arg.is_empty() {
                    return Err(invalid("select needs an index or a path"));
                }
                ShellCommand::Select(arg.to_string())
            }
            "play" | "pause" | "p" => ShellCommand::Play,
            "seek" => ShellCommand::Seek(parse_number(verb, arg)?),
            "volume" | "vol" => ShellCommand::Volume(parse_number(verb, arg)?),
            "export" => ShellCommand::Export,
            "open" => ShellCommand::Open,
            "reload" => ShellCommand::Reload,
            "status" => ShellCommand::Status,
            "close" | "quit" | "exit" => ShellCommand::Close,
            "help" | "?" => ShellCommand::Help,
            other => return Err(invalid(&format!("unknown command {:?}", other))),
        };

        Ok(Some(command))
    }
}

#[track_caller]
fn parse_number(verb: &str, arg: &str) -> AppResult<f64> {
    arg.parse::<f64>()
        .map_err(|e| invalid(&format!("{} needs a number, got {:?}: {}", verb, arg, e)))
}

#[track_caller]
fn invalid(reason: &str) -> AppError {
    AppError::InvalidCommand {
        reason: reason.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
