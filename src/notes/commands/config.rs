use crate::commands::{CmdMessage, CmdResult};
use crate::config::Config;
use crate::error::NotesError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Home,
    Git,
    Editor,
    Pager,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::Home,
        ConfigKey::Git,
        ConfigKey::Editor,
        ConfigKey::Pager,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::Home => "home",
            ConfigKey::Git => "git",
            ConfigKey::Editor => "editor",
            ConfigKey::Pager => "pager",
        }
    }

    fn value(&self, config: &Config) -> String {
        match self {
            ConfigKey::Home => config.home_path.display().to_string(),
            ConfigKey::Git => config.git_path.display().to_string(),
            ConfigKey::Editor => config.editor_cmd.clone(),
            ConfigKey::Pager => config.pager_cmd.clone(),
        }
    }
}

impl FromStr for ConfigKey {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| {
                NotesError::Validation(format!(
                    "unknown config key '{}' (expected home, git, editor or pager)",
                    s
                ))
            })
    }
}

/// Collects one or all configuration values for display.
pub fn run(config: &Config, key: Option<ConfigKey>) -> CmdResult {
    let keys: Vec<ConfigKey> = match key {
        Some(key) => vec![key],
        None => ConfigKey::ALL.to_vec(),
    };

    let mut result = CmdResult::default().with_config(config.clone());
    result.config_entries = keys
        .into_iter()
        .map(|key| (key.name(), key.value(config)))
        .collect();

    if key.is_none() {
        for (name, hint) in missing_capabilities(config) {
            result.add_message(CmdMessage::info(format!("{} is not available: {}", name, hint)));
        }
    }
    result
}

fn missing_capabilities(config: &Config) -> Vec<(&'static str, &'static str)> {
    let mut missing = Vec::new();
    if config.git().is_none() {
        missing.push(("git", "install git or set $NOTES_CLI_GIT"));
    }
    if config.editor().is_none() {
        missing.push(("editor", "set $NOTES_CLI_EDITOR or $EDITOR"));
    }
    if config.pager().is_none() {
        missing.push(("pager", "set $NOTES_CLI_PAGER or $PAGER"));
    }
    missing
}
