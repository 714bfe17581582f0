mod clock_media;
mod shell_command;
