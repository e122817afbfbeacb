use crate::commands::CmdResult;
use crate::config::Config;
use crate::editor::Editor;
use crate::error::Result;
use crate::git::VersionControl;
use crate::input::{self, Streams};
use crate::model::Note;
use std::io::{Read, Write};
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct NewArgs {
    pub category: String,
    pub filename: String,
    pub tags: String,
    /// Skip inline stdin input when no editor is usable.
    pub no_inline: bool,
}

/// Creates the note, initializes version control, then acquires content.
///
/// A git failure is written to stderr as a warning before content is
/// acquired, so it shows up before an editor takes over the terminal. It does
/// not stop the note from being created.
pub fn run<R: Read, O: Write, E: Write>(
    config: &Config,
    args: &NewArgs,
    editor: Option<&dyn Editor>,
    vcs: Option<&dyn VersionControl>,
    streams: &mut Streams<R, O, E>,
) -> Result<CmdResult> {
    let note = Note::new(
        args.category.as_str(),
        args.filename.as_str(),
        args.tags.as_str(),
        config,
    )?;
    note.create()?;
    info!(
        note = %note.rel_path().display(),
        tags = ?note.tag_list(),
        "note created"
    );

    let mut result = CmdResult::default().with_note_path(note.file_path());

    if let Some(vcs) = vcs {
        if let Err(e) = vcs.init() {
            warn!(error = %e, "version control init failed");
            streams.warning(format_args!("Could not initialize git repository: {}", e))?;
        }
    }

    let acquired = input::acquire(&note.file_path(), editor, args.no_inline, streams)?;
    result.acquired = Some(acquired);
    Ok(result)
}
