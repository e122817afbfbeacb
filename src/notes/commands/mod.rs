//! # Command Layer
//!
//! Each command lives in its own submodule as a plain function that takes the
//! resolved [`Config`] and its arguments and returns a structured
//! [`CmdResult`]. Commands do not parse arguments, pick exit codes, or decide
//! colors; that is the binary's job.
//!
//! The one exception to "no terminal I/O" is content acquisition for `new`,
//! which is interactive by nature. It writes to the [`Streams`] it is handed,
//! never to the process streams directly, so tests pass in buffers.
//!
//! - [`new`]: Create a note and acquire its content
//! - [`config`]: Show the resolved configuration
//!
//! [`Streams`]: crate::input::Streams

use crate::config::Config;
use crate::input::Acquired;
use std::path::PathBuf;

pub mod config;
pub mod new;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub note_path: Option<PathBuf>,
    pub acquired: Option<Acquired>,
    /// `(key, value)` pairs for the `config` command, in display order.
    pub config_entries: Vec<(&'static str, String)>,
    pub config: Option<Config>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_note_path(mut self, path: PathBuf) -> Self {
        self.note_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}
