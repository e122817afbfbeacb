use crate::config::Config;
use crate::error::{NotesError, Result};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A note file at `<home>/<category>/<filename>`.
///
/// Construction validates the category and filename; nothing touches the
/// filesystem until [`Note::create`].
#[derive(Debug, Clone)]
pub struct Note<'a> {
    pub category: String,
    pub filename: String,
    /// Comma-separated tags, kept verbatim. They are not written into the
    /// note file, which holds only the acquired content.
    pub tags: String,
    config: &'a Config,
}

impl<'a> Note<'a> {
    pub fn new(
        category: impl Into<String>,
        filename: impl Into<String>,
        tags: impl Into<String>,
        config: &'a Config,
    ) -> Result<Self> {
        let category = category.into();
        let filename = filename.into();
        validate_segment("category", &category)?;
        validate_segment("filename", &filename)?;

        Ok(Self {
            category,
            filename,
            tags: tags.into(),
            config,
        })
    }

    pub fn dir_path(&self) -> PathBuf {
        self.config.home_path.join(&self.category)
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir_path().join(&self.filename)
    }

    /// Path relative to the notes home, e.g. `work/todo`.
    pub fn rel_path(&self) -> PathBuf {
        Path::new(&self.category).join(&self.filename)
    }

    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Creates the category directory if needed, then an empty note file.
    ///
    /// Never truncates: an existing file yields [`NotesError::AlreadyExists`].
    pub fn create(&self) -> Result<()> {
        let dir = self.dir_path();
        fs::create_dir_all(&dir).map_err(|e| {
            NotesError::io(
                format!("Could not create category directory '{}'", dir.display()),
                e,
            )
        })?;

        let path = self.file_path();
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                debug!(path = %path.display(), tags = %self.tags, "created note file");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(NotesError::AlreadyExists(path))
            }
            Err(e) => Err(NotesError::io(
                format!("Could not create note file '{}'", path.display()),
                e,
            )),
        }
    }
}

/// A category or filename must be exactly one path segment.
fn validate_segment(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(NotesError::Validation(format!("{} must not be empty", what)));
    }
    if value.contains(['/', '\\']) {
        return Err(NotesError::Validation(format!(
            "{} '{}' must not contain a path separator",
            what, value
        )));
    }
    if value == "." || value == ".." {
        return Err(NotesError::Validation(format!(
            "{} '{}' is not a valid name",
            what, value
        )));
    }
    Ok(())
}
