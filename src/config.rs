use std::fs;
use std::path::{Path, PathBuf};
use crate::error::Result;

/// Overrides the task list location.
pub const TASK_LIST_ENV: &str = "TSKS_TASK_LIST";
/// Overrides the favorites location.
pub const FAVORITES_ENV: &str = "TSKS_FAVORITES";

const APP_DIR: &str = "tsks";
const TASK_LIST_FILE: &str = "tasks.json";
const FAVORITES_FILE: &str = "favorites.json";

/// Where the task list and the favorites are stored.
///
/// Built once at startup and handed to every load and save.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub task_list_path: PathBuf,
    pub favorites_path: PathBuf,
}

impl Config {
    pub fn new(task_list_path: impl Into<PathBuf>, favorites_path: impl Into<PathBuf>) -> Self {
        Config {
            task_list_path: task_list_path.into(),
            favorites_path: favorites_path.into(),
        }
    }

    /// Both files with their default names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Config::new(dir.join(TASK_LIST_FILE), dir.join(FAVORITES_FILE))
    }

    /// Resolves both paths from the environment.
    ///
    /// The task list is taken from `TSKS_TASK_LIST`, then `~/tsks/tasks.json`
    /// if it already exists, then `tsks/tasks.json` under the local data
    /// directory. Favorites come from `TSKS_FAVORITES`, or sit next to the
    /// task list. Missing parent directories are created.
    pub fn from_env() -> Result<Self> {
        let task_list_path = env_path(TASK_LIST_ENV).unwrap_or_else(default_task_list_path);
        let favorites_path = env_path(FAVORITES_ENV).unwrap_or_else(|| {
            let mut p = task_list_path.clone();
            p.pop();
            p.push(FAVORITES_FILE);
            p
        });

        for path in [&task_list_path, &favorites_path] {
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() && !dir.exists() {
                    log::debug!("Creating data directory {}", dir.display());
                    fs::create_dir_all(dir)?;
                }
            }
        }

        log::debug!(
            "Task list at {}, favorites at {}",
            task_list_path.display(),
            favorites_path.display()
        );
        Ok(Config { task_list_path, favorites_path })
    }
}

/// Replaces a leading `$VAR` path component with the value of `VAR`.
///
/// An unset variable expands to the empty string, so `$NOPE/a` becomes `/a`.
pub fn expand_env_path(raw: &str) -> PathBuf {
    let (first, rest) = match raw.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (raw, None),
    };
    let Some(var) = first.strip_prefix('$') else {
        return PathBuf::from(raw);
    };
    let mut expanded = std::env::var(var).unwrap_or_default();
    if let Some(rest) = rest {
        expanded.push('/');
        expanded.push_str(rest);
    }
    PathBuf::from(expanded)
}

fn env_path(name: &str) -> Option<PathBuf> {
    let value = std::env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(expand_env_path(trimmed))
}

fn default_task_list_path() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        let legacy = home.join(APP_DIR).join(TASK_LIST_FILE);
        if legacy.exists() {
            return legacy;
        }
    }
    let mut p = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    p.push(APP_DIR);
    p.push(TASK_LIST_FILE);
    p
}
