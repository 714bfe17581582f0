use crate::{AppError, ShellCommand};

/// WHAT: Commands and their arguments parse
/// WHY: Each shell line maps to exactly one preview intent
#[test]
#[allow(clippy::unwrap_used)]
fn given_valid_lines_when_parsing_then_commands_returned() {
    let cases = [
        ("list", ShellCommand::List),
        ("select 2", ShellCommand::Select("2".to_string())),
        (
            "select /rec/My Clip.cap",
            ShellCommand::Select("/rec/My Clip.cap".to_string()),
        ),
        ("  PLAY ", ShellCommand::Play),
        ("seek 12.5", ShellCommand::Seek(12.5)),
        ("vol 0.3", ShellCommand::Volume(0.3)),
        ("export", ShellCommand::Export),
        ("open", ShellCommand::Open),
        ("reload", ShellCommand::Reload),
        ("status", ShellCommand::Status),
        ("quit", ShellCommand::Close),
        ("?", ShellCommand::Help),
    ];

    for (line, expected) in cases {
        assert_eq!(ShellCommand::parse(line).unwrap(), Some(expected), "{line}");
    }
}

/// WHAT: Blank lines are not commands
/// WHY: Pressing enter should do nothing
#[test]
#[allow(clippy::unwrap_used)]
fn given_blank_line_when_parsing_then_none() {
    assert_eq!(ShellCommand::parse("   ").unwrap(), None);
}

/// WHAT: Unknown verbs and bad numbers are invalid commands
/// WHY: Typos must be reported instead of acting on the wrong recording
#[test]
fn given_bad_lines_when_parsing_then_invalid_command() {
    for line in ["rewind", "seek", "seek soon", "volume loud", "select"] {
        assert!(
            matches!(
                ShellCommand::parse(line),
                Err(AppError::InvalidCommand { .. })
            ),
            "{line}"
        );
    }
}
