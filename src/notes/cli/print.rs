use colored::Colorize;
use notes::commands::{CmdMessage, MessageLevel};

/// Messages are diagnostics, so they go to stderr.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
        }
    }
}

/// A single value prints bare so it can be used in `$(notes config home)`.
pub(super) fn print_config_entries(entries: &[(&'static str, String)], bare: bool) {
    if bare {
        for (_, value) in entries {
            println!("{}", value);
        }
        return;
    }

    for (key, value) in entries {
        println!("{}: {}", key.bold(), value);
    }
}
