//! # Configuration
//!
//! notes has no configuration file. Everything is derived from the process
//! environment once, at startup, by [`Config::resolve`]. The resulting
//! [`Config`] is an immutable value that the command layer passes by
//! reference to everything that needs it.
//!
//! ## Resolution Order
//!
//! | Field        | Sources, first match wins                                                |
//! |--------------|--------------------------------------------------------------------------|
//! | `home_path`  | `$NOTES_CLI_HOME`, `$XDG_DATA_HOME/notes-cli`, `$APPLOCALDATA/notes-cli` (Windows), `~/.local/share/notes-cli` |
//! | `git_path`   | `$NOTES_CLI_GIT` or `git`, looked up on `$PATH`                          |
//! | `editor_cmd` | `$NOTES_CLI_EDITOR`, `$EDITOR`                                           |
//! | `pager_cmd`  | `$NOTES_CLI_PAGER`, `$PAGER`, `less -R -F -X` if `less` is installed     |
//!
//! Only `home_path` is mandatory. The other three are optional capabilities:
//! when they cannot be found the field is left empty and the feature is
//! unavailable, which is never an error.
//!
//! Environment access goes through the [`Environment`] trait so resolution can
//! be tested without touching the real process environment.

use crate::error::{NotesError, Result};
use directories::BaseDirs;
use serde::Serialize;
use std::fs::DirBuilder;
use std::io;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};
use tracing::debug;

pub const APP_DIR_NAME: &str = "notes-cli";
const DEFAULT_PAGER: &str = "less -R -F -X";

pub const ENV_HOME: &str = "NOTES_CLI_HOME";
pub const ENV_GIT: &str = "NOTES_CLI_GIT";
pub const ENV_EDITOR: &str = "NOTES_CLI_EDITOR";
pub const ENV_PAGER: &str = "NOTES_CLI_PAGER";

/// Source of environment facts consulted during resolution.
pub trait Environment {
    /// Value of an environment variable. `Some("")` means set but empty.
    fn var(&self, key: &str) -> Option<String>;

    /// Home directory of the current user.
    fn home_dir(&self) -> Option<PathBuf>;

    fn is_windows(&self) -> bool;

    /// Looks up an executable on the search path.
    fn which(&self, program: &Path) -> Option<PathBuf>;
}

/// The real process environment.
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }

    fn is_windows(&self) -> bool {
        cfg!(windows)
    }

    fn which(&self, program: &Path) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// Resolved user configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Root directory of all notes. Always exists once resolved.
    pub home_path: PathBuf,
    /// Absolute path of the git executable, empty when git is unavailable.
    pub git_path: PathBuf,
    /// Editor command, may carry arguments (e.g. `vim -g`). Empty when unset.
    pub editor_cmd: String,
    /// Pager command used to page listings. Empty when unset.
    pub pager_cmd: String,
}

impl Config {
    /// Resolves the configuration from the process environment.
    pub fn resolve() -> Result<Self> {
        Self::resolve_with(&ProcessEnv)
    }

    /// Resolves the configuration from `env` and makes sure the home
    /// directory exists.
    pub fn resolve_with<E: Environment>(env: &E) -> Result<Self> {
        let home_path = home_path(env)?;
        ensure_home(&home_path)?;

        let config = Self {
            home_path,
            git_path: git_path(env),
            editor_cmd: editor_cmd(env),
            pager_cmd: pager_cmd(env),
        };
        debug!(?config, "resolved configuration");
        Ok(config)
    }

    pub fn git(&self) -> Option<&Path> {
        (!self.git_path.as_os_str().is_empty()).then_some(self.git_path.as_path())
    }

    pub fn editor(&self) -> Option<&str> {
        non_empty(&self.editor_cmd)
    }

    pub fn pager(&self) -> Option<&str> {
        non_empty(&self.pager_cmd)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.trim().is_empty()).then_some(s)
}

/// Like [`Environment::var`] but treats an empty value as unset.
fn var_non_empty<E: Environment>(env: &E, key: &str) -> Option<String> {
    env.var(key).filter(|v| !v.is_empty())
}

fn user_home<E: Environment>(env: &E) -> Result<PathBuf> {
    env.home_dir().ok_or_else(|| {
        NotesError::resolution(
            format!("Cannot locate home directory. Please set ${}", ENV_HOME),
            io::Error::new(io::ErrorKind::NotFound, "current user has no home directory"),
        )
    })
}

fn home_path<E: Environment>(env: &E) -> Result<PathBuf> {
    let path = if let Some(value) = var_non_empty(env, ENV_HOME) {
        match strip_tilde(&value) {
            Some(rest) => user_home(env)?.join(rest),
            None => PathBuf::from(value),
        }
    } else if let Some(xdg) = var_non_empty(env, "XDG_DATA_HOME") {
        Path::new(&xdg).join(APP_DIR_NAME)
    } else if let Some(local) = var_non_empty(env, "APPLOCALDATA").filter(|_| env.is_windows()) {
        Path::new(&local).join(APP_DIR_NAME)
    } else {
        user_home(env)?
            .join(".local")
            .join("share")
            .join(APP_DIR_NAME)
    };

    let absolute = std::path::absolute(&path).map_err(|e| {
        NotesError::resolution(
            format!("Cannot make home '{}' absolute", path.display()),
            e,
        )
    })?;
    Ok(clean_path(&absolute))
}

fn strip_tilde(value: &str) -> Option<&str> {
    let rest = value.strip_prefix('~')?;
    rest.strip_prefix('/')
        .or_else(|| rest.strip_prefix(MAIN_SEPARATOR))
}

#[cfg(unix)]
fn ensure_home(path: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(path)
        .map_err(|e| {
            NotesError::resolution(format!("Could not create home '{}'", path.display()), e)
        })
}

#[cfg(not(unix))]
fn ensure_home(path: &Path) -> Result<()> {
    DirBuilder::new().recursive(true).create(path).map_err(|e| {
        NotesError::resolution(format!("Could not create home '{}'", path.display()), e)
    })
}

fn git_path<E: Environment>(env: &E) -> PathBuf {
    let candidate = match env.var(ENV_GIT) {
        Some(value) => clean_path(Path::new(&value)),
        None => PathBuf::from("git"),
    };

    match env.which(&candidate) {
        Some(exe) => exe,
        None => {
            // git is optional
            debug!(candidate = %candidate.display(), "git executable not found");
            PathBuf::new()
        }
    }
}

fn editor_cmd<E: Environment>(env: &E) -> String {
    env.var(ENV_EDITOR)
        .or_else(|| env.var("EDITOR"))
        .unwrap_or_default()
}

fn pager_cmd<E: Environment>(env: &E) -> String {
    if let Some(pager) = env.var(ENV_PAGER).or_else(|| env.var("PAGER")) {
        return pager;
    }
    if env.which(Path::new("less")).is_some() {
        return DEFAULT_PAGER.to_string();
    }
    String::new()
}

/// Lexically normalizes a path: drops `.`, folds `name/..`, and keeps
/// leading `..` that cannot be folded. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    /// Map-backed environment for tests.
    #[derive(Default)]
    struct FakeEnv {
        vars: HashMap<String, String>,
        home: Option<PathBuf>,
        windows: bool,
        executables: HashMap<PathBuf, PathBuf>,
    }

    impl FakeEnv {
        fn with_var(mut self, key: &str, value: &str) -> Self {
            self.vars.insert(key.to_string(), value.to_string());
            self
        }

        fn with_home(mut self, home: &Path) -> Self {
            self.home = Some(home.to_path_buf());
            self
        }

        fn with_executable(mut self, name: &str, resolved: &str) -> Self {
            self.executables
                .insert(PathBuf::from(name), PathBuf::from(resolved));
            self
        }
    }

    impl Environment for FakeEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.vars.get(key).cloned()
        }

        fn home_dir(&self) -> Option<PathBuf> {
            self.home.clone()
        }

        fn is_windows(&self) -> bool {
            self.windows
        }

        fn which(&self, program: &Path) -> Option<PathBuf> {
            self.executables.get(program).cloned()
        }
    }

    #[test]
    fn test_home_from_override() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("notes");
        let env = FakeEnv::default().with_var(ENV_HOME, home.to_str().unwrap());

        let config = Config::resolve_with(&env).unwrap();
        assert_eq!(config.home_path, home);
        assert!(home.is_dir());
    }

    #[test]
    fn test_home_override_is_cleaned() {
        let temp = TempDir::new().unwrap();
        let raw = format!("{}/a/./b/../c", temp.path().display());
        let env = FakeEnv::default().with_var(ENV_HOME, &raw);

        let config = Config::resolve_with(&env).unwrap();
        assert_eq!(config.home_path, temp.path().join("a").join("c"));
    }

    #[test]
    fn test_home_override_expands_tilde() {
        let temp = TempDir::new().unwrap();
        let env = FakeEnv::default()
            .with_home(temp.path())
            .with_var(ENV_HOME, "~/my-notes");

        let config = Config::resolve_with(&env).unwrap();
        assert_eq!(config.home_path, temp.path().join("my-notes"));
    }

    #[test]
    fn test_home_from_xdg_data_home() {
        let temp = TempDir::new().unwrap();
        let env = FakeEnv::default().with_var("XDG_DATA_HOME", temp.path().to_str().unwrap());

        let config = Config::resolve_with(&env).unwrap();
        assert_eq!(config.home_path, temp.path().join(APP_DIR_NAME));
    }

    #[test]
    fn test_empty_override_falls_through_to_xdg() {
        let temp = TempDir::new().unwrap();
        let env = FakeEnv::default()
            .with_var(ENV_HOME, "")
            .with_var("XDG_DATA_HOME", temp.path().to_str().unwrap());

        let config = Config::resolve_with(&env).unwrap();
        assert_eq!(config.home_path, temp.path().join(APP_DIR_NAME));
    }

    #[test]
    fn test_applocaldata_only_on_windows() {
        let temp = TempDir::new().unwrap();
        let user_home = temp.path().join("user");
        let local = temp.path().join("local");

        let env = FakeEnv::default()
            .with_home(&user_home)
            .with_var("APPLOCALDATA", local.to_str().unwrap());
        let config = Config::resolve_with(&env).unwrap();
        assert_eq!(
            config.home_path,
            user_home.join(".local").join("share").join(APP_DIR_NAME)
        );

        let mut env = env;
        env.windows = true;
        let config = Config::resolve_with(&env).unwrap();
        assert_eq!(config.home_path, local.join(APP_DIR_NAME));
    }

    #[test]
    fn test_default_home_under_user_home() {
        let temp = TempDir::new().unwrap();
        let env = FakeEnv::default().with_home(temp.path());

        let config = Config::resolve_with(&env).unwrap();
        assert_eq!(
            config.home_path,
            temp.path().join(".local").join("share").join(APP_DIR_NAME)
        );
        assert!(config.home_path.is_dir());
    }

    #[test]
    fn test_missing_user_home_is_resolution_error() {
        let env = FakeEnv::default();
        let err = Config::resolve_with(&env).unwrap_err();
        assert!(matches!(err, NotesError::Resolution { .. }));
    }

    #[test]
    fn test_uncreatable_home_is_resolution_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "not a dir").unwrap();
        let env = FakeEnv::default().with_var(ENV_HOME, blocker.join("home").to_str().unwrap());

        let err = Config::resolve_with(&env).unwrap_err();
        assert!(matches!(err, NotesError::Resolution { .. }));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let env = FakeEnv::default().with_var(ENV_HOME, temp.path().to_str().unwrap());

        let first = Config::resolve_with(&env).unwrap();
        fs::write(first.home_path.join("keep.txt"), "kept").unwrap();

        let second = Config::resolve_with(&env).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            fs::read_to_string(second.home_path.join("keep.txt")).unwrap(),
            "kept"
        );
    }

    #[test]
    fn test_git_defaults_to_git_on_path() {
        let temp = TempDir::new().unwrap();
        let env = FakeEnv::default()
            .with_var(ENV_HOME, temp.path().to_str().unwrap())
            .with_executable("git", "/usr/bin/git");

        let config = Config::resolve_with(&env).unwrap();
        assert_eq!(config.git_path, PathBuf::from("/usr/bin/git"));
        assert_eq!(config.git(), Some(Path::new("/usr/bin/git")));
    }

    #[test]
    fn test_git_override_missing_executable_is_empty() {
        let temp = TempDir::new().unwrap();
        let env = FakeEnv::default()
            .with_var(ENV_HOME, temp.path().to_str().unwrap())
            .with_var(ENV_GIT, "/nonexistent/bin/git")
            .with_executable("git", "/usr/bin/git");

        let config = Config::resolve_with(&env).unwrap();
        assert!(config.git_path.as_os_str().is_empty());
        assert_eq!(config.git(), None);
    }

    #[test]
    fn test_git_override_is_cleaned_before_lookup() {
        let temp = TempDir::new().unwrap();
        let env = FakeEnv::default()
            .with_var(ENV_HOME, temp.path().to_str().unwrap())
            .with_var(ENV_GIT, "/opt/./tools/../bin/git")
            .with_executable("/opt/bin/git", "/opt/bin/git");

        let config = Config::resolve_with(&env).unwrap();
        assert_eq!(config.git_path, PathBuf::from("/opt/bin/git"));
    }

    #[test]
    fn test_editor_precedence() {
        let temp = TempDir::new().unwrap();
        let base = FakeEnv::default().with_var(ENV_HOME, temp.path().to_str().unwrap());

        let env = base.with_var("EDITOR", "vi");
        assert_eq!(Config::resolve_with(&env).unwrap().editor_cmd, "vi");

        let env = env.with_var(ENV_EDITOR, "vim -g");
        assert_eq!(Config::resolve_with(&env).unwrap().editor_cmd, "vim -g");

        // Set but empty still wins and disables the editor
        let env = env.with_var(ENV_EDITOR, "");
        let config = Config::resolve_with(&env).unwrap();
        assert_eq!(config.editor_cmd, "");
        assert_eq!(config.editor(), None);
    }

    #[test]
    fn test_pager_precedence() {
        let temp = TempDir::new().unwrap();
        let env = FakeEnv::default().with_var(ENV_HOME, temp.path().to_str().unwrap());
        assert_eq!(Config::resolve_with(&env).unwrap().pager_cmd, "");

        let env = env.with_executable("less", "/usr/bin/less");
        assert_eq!(Config::resolve_with(&env).unwrap().pager_cmd, DEFAULT_PAGER);

        let env = env.with_var("PAGER", "more");
        assert_eq!(Config::resolve_with(&env).unwrap().pager_cmd, "more");

        let env = env.with_var(ENV_PAGER, "bat");
        assert_eq!(Config::resolve_with(&env).unwrap().pager_cmd, "bat");
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path(Path::new("a/./b/../c")), PathBuf::from("a/c"));
        assert_eq!(clean_path(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(clean_path(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("git")), PathBuf::from("git"));
    }
}
