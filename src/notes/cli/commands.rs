use super::print::{print_config_entries, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use notes::commands;
use notes::commands::config::ConfigKey;
use notes::commands::new::NewArgs;
use notes::config::Config;
use notes::editor::{CommandEditor, Editor};
use notes::error::Result;
use notes::git::{Git, VersionControl};
use notes::input::Streams;
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "NOTES_CLI_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::resolve()?;

    match cli.command {
        Commands::New {
            category,
            filename,
            tags,
            no_inline_input,
        } => handle_new(
            &config,
            NewArgs {
                category,
                filename,
                tags,
                no_inline: no_inline_input,
            },
        ),
        Commands::Config { key, json } => handle_config(&config, key, json),
    }
}

/// Logs go to stderr so stdout stays reserved for note paths.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn handle_new(config: &Config, args: NewArgs) -> Result<()> {
    let editor = config.editor().map(CommandEditor::new);
    let git = Git::from_config(config);
    let mut streams = Streams::stdio();

    let result = commands::new::run(
        config,
        &args,
        editor.as_ref().map(|e| e as &dyn Editor),
        git.as_ref().map(|g| g as &dyn VersionControl),
        &mut streams,
    )?;

    print_messages(&result.messages);
    Ok(())
}

fn handle_config(config: &Config, key: Option<ConfigKey>, json: bool) -> Result<()> {
    let result = commands::config::run(config, key);

    if json {
        let value = match key {
            Some(_) => {
                let entries: BTreeMap<_, _> = result.config_entries.iter().cloned().collect();
                serde_json::to_string_pretty(&entries)?
            }
            None => serde_json::to_string_pretty(&result.config)?,
        };
        println!("{}", value);
    } else {
        print_config_entries(&result.config_entries, key.is_some());
    }

    print_messages(&result.messages);
    Ok(())
}
