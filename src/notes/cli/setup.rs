use clap::{Parser, Subcommand};
use notes::commands::config::ConfigKey;

#[derive(Parser, Debug)]
#[command(name = "notes", bin_name = "notes", version)]
#[command(about = "Simple note taking tool for command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    New {
        /// Category of the note. Must be a valid directory name
        category: String,

        /// File name of the note
        filename: String,

        /// Comma-separated tags of the note
        #[arg(default_value = "")]
        tags: String,

        /// Do not request inline input even if no editor is available
        #[arg(long = "no-inline-input")]
        no_inline_input: bool,
    },

    /// Show the resolved configuration
    Config {
        /// One of home, git, editor, pager (all when omitted)
        key: Option<ConfigKey>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new() {
        let cli = Cli::try_parse_from(["notes", "new", "work", "todo", "urgent,today"]).unwrap();
        match cli.command {
            Commands::New {
                category,
                filename,
                tags,
                no_inline_input,
            } => {
                assert_eq!(category, "work");
                assert_eq!(filename, "todo");
                assert_eq!(tags, "urgent,today");
                assert!(!no_inline_input);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_new_without_tags() {
        let cli =
            Cli::try_parse_from(["notes", "new", "--no-inline-input", "work", "todo"]).unwrap();
        match cli.command {
            Commands::New {
                tags,
                no_inline_input,
                ..
            } => {
                assert_eq!(tags, "");
                assert!(no_inline_input);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_new_requires_filename() {
        assert!(Cli::try_parse_from(["notes", "new", "work"]).is_err());
    }

    #[test]
    fn test_parse_config_key() {
        let cli = Cli::try_parse_from(["notes", "config", "editor"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                key: Some(ConfigKey::Editor),
                json: false
            }
        ));
        assert!(Cli::try_parse_from(["notes", "config", "bogus"]).is_err());
    }
}
