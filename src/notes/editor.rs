use crate::error::{NotesError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Something that can open a file for the user to edit.
pub trait Editor {
    /// Opens `path` and blocks until the user is done.
    fn edit(&self, path: &Path) -> Result<()>;
}

/// Runs the configured editor command as a child process.
///
/// The command may carry arguments (`"code --wait"`) and is split with shell
/// quoting rules, so quoted program paths and arguments stay whole. The file
/// path is appended as the last argument.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    cmd: String,
}

impl CommandEditor {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self { cmd: cmd.into() }
    }
}

impl Editor for CommandEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        let words = shell_words::split(&self.cmd).map_err(|e| {
            NotesError::Editor(format!("Cannot parse editor command '{}': {}", self.cmd, e))
        })?;
        let (program, args) = words
            .split_first()
            .ok_or_else(|| NotesError::Editor("Editor command is empty".to_string()))?;

        debug!(editor = %self.cmd, path = %path.display(), "launching editor");
        let status = Command::new(program)
            .args(args)
            .arg(path)
            .status()
            .map_err(|e| {
                NotesError::Editor(format!("Failed to launch editor '{}': {}", self.cmd, e))
            })?;

        if !status.success() {
            return Err(NotesError::Editor(format!(
                "Editor '{}' exited with {}",
                self.cmd, status
            )));
        }

        Ok(())
    }
}
