//! # Content Acquisition
//!
//! After a note file is created its first content is acquired by a small
//! state machine:
//!
//! ```text
//!   TryEditor ──fail──▶ TryInlineStdin ──▶ done
//!       │     ╲
//!       ok     fail + no_inline
//!       │         ╲
//!      done        PathOnly ──▶ done
//! ```
//!
//! - **TryEditor**: run the configured editor on the file and wait for it.
//! - **TryInlineStdin**: read standard input to EOF and append it to the file.
//! - **PathOnly**: print the path and leave the (possibly empty) file alone.
//!
//! Without an editor the machine starts at `TryInlineStdin`, or at `PathOnly`
//! when inline input is suppressed. Standard streams are injected through
//! [`Streams`] so every stage can be exercised in tests.

use crate::editor::Editor;
use crate::error::{NotesError, Result};
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

const INLINE_PROMPT: &str = "Input notes inline (Send EOF by Ctrl+D to stop):";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStage {
    TryEditor,
    TryInlineStdin,
    PathOnly,
}

impl InputStage {
    pub fn initial(has_editor: bool, no_inline: bool) -> Self {
        if has_editor {
            InputStage::TryEditor
        } else {
            Self::without_editor(no_inline)
        }
    }

    /// Where to go once the editor is unavailable or has failed.
    pub fn without_editor(no_inline: bool) -> Self {
        if no_inline {
            InputStage::PathOnly
        } else {
            InputStage::TryInlineStdin
        }
    }
}

/// How the note got its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquired {
    Editor,
    Inline { bytes: usize },
    PathOnly,
}

pub struct Streams<R, O, E> {
    pub stdin: R,
    pub stdout: O,
    pub stderr: E,
}

impl Streams<io::Stdin, io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
            stderr: io::stderr(),
        }
    }
}

impl<R: Read, O: Write, E: Write> Streams<R, O, E> {
    fn print_path(&mut self, path: &Path) -> Result<()> {
        writeln!(self.stdout, "{}", path.display())
            .map_err(|e| NotesError::io("Cannot write to stdout", e))
    }

    fn note(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.stderr, "Note: {}", message)
            .map_err(|e| NotesError::io("Cannot write to stderr", e))
    }

    pub(crate) fn warning(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.stderr, "Warning: {}", message)
            .map_err(|e| NotesError::io("Cannot write to stderr", e))
    }
}

/// Runs the acquisition state machine for the note at `path`.
pub fn acquire<Ed, R, O, E>(
    path: &Path,
    editor: Option<&Ed>,
    no_inline: bool,
    streams: &mut Streams<R, O, E>,
) -> Result<Acquired>
where
    Ed: Editor + ?Sized,
    R: Read,
    O: Write,
    E: Write,
{
    let mut stage = InputStage::initial(editor.is_some(), no_inline);
    if editor.is_none() && !no_inline {
        streams.note("No editor is set. Set $NOTES_CLI_EDITOR or $EDITOR to use one")?;
    }

    loop {
        debug!(?stage, path = %path.display(), "input stage");
        stage = match stage {
            InputStage::TryEditor => match editor.map(|ed| ed.edit(path)) {
                Some(Ok(())) => return Ok(Acquired::Editor),
                Some(Err(e)) => {
                    warn!(error = %e, "editor failed");
                    if !no_inline {
                        streams.note(&e)?;
                    }
                    InputStage::without_editor(no_inline)
                }
                None => InputStage::without_editor(no_inline),
            },
            InputStage::TryInlineStdin => {
                let bytes = inline_input(path, streams)?;
                return Ok(Acquired::Inline { bytes });
            }
            InputStage::PathOnly => {
                // Final fallback: users open the file by themselves
                streams.print_path(path)?;
                return Ok(Acquired::PathOnly);
            }
        };
    }
}

/// Reads stdin to EOF and appends it to the note.
fn inline_input<R: Read, O: Write, E: Write>(
    path: &Path,
    streams: &mut Streams<R, O, E>,
) -> Result<usize> {
    writeln!(streams.stderr, "{}", INLINE_PROMPT)
        .map_err(|e| NotesError::io("Cannot write to stderr", e))?;

    let mut buf = Vec::new();
    streams
        .stdin
        .read_to_end(&mut buf)
        .map_err(|e| NotesError::io("Cannot read from stdin", e))?;

    let mut file = OpenOptions::new().append(true).open(path).map_err(|e| {
        NotesError::io(format!("Cannot open note file '{}'", path.display()), e)
    })?;
    file.write_all(&buf).map_err(|e| {
        NotesError::io(format!("Cannot write to note file '{}'", path.display()), e)
    })?;

    writeln!(streams.stderr).map_err(|e| NotesError::io("Cannot write to stderr", e))?;
    streams.print_path(path)?;
    Ok(buf.len())
}
