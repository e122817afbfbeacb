use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("{message}: {source}")]
    Resolution {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid note: {0}")]
    Validation(String),

    #[error("Note already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Git error: {0}")]
    Git(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NotesError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        NotesError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn resolution(message: impl Into<String>, source: std::io::Error) -> Self {
        NotesError::Resolution {
            message: message.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
