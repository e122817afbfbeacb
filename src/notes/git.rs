use crate::config::Config;
use crate::error::{NotesError, Result};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Version control over the notes home directory.
pub trait VersionControl {
    /// Makes the notes home a repository. A no-op if it already is one.
    fn init(&self) -> Result<()>;
}

/// The `git` executable operating on the notes home.
#[derive(Debug, Clone)]
pub struct Git {
    bin: PathBuf,
    home: PathBuf,
}

impl Git {
    /// `None` when no git executable was found during configuration.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.git().map(|bin| Self {
            bin: bin.to_path_buf(),
            home: config.home_path.clone(),
        })
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        debug!(git = %self.bin.display(), ?args, "running git");
        let output = Command::new(&self.bin)
            .args(args)
            .current_dir(&self.home)
            .output()
            .map_err(|e| {
                NotesError::Git(format!("Cannot run '{}': {}", self.bin.display(), e))
            })?;

        if !output.status.success() {
            return Err(NotesError::Git(format!(
                "'git {}' failed ({}): {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }
}

impl VersionControl for Git {
    fn init(&self) -> Result<()> {
        if self.home.join(".git").exists() {
            return Ok(());
        }
        self.run(&["init"])
    }
}
