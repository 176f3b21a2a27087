use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use serde::de::DeserializeOwned;
use crate::config::Config;
use crate::error::Result;
use crate::models::{Favorite, TaskList};

/// Loads the task list.
///
/// A missing or blank file is an empty task list. Days without tasks are dropped.
pub fn load_tasks(config: &Config) -> Result<TaskList> {
    let mut tasks: TaskList = load_json(&config.task_list_path)?.unwrap_or_default();
    tasks.prune();
    log::debug!("Loaded {} days from {}", tasks.len(), config.task_list_path.display());
    Ok(tasks)
}

/// Saves the task list, overwriting the existing file.
pub fn save_tasks(config: &Config, tasks: &TaskList) -> Result<()> {
    let s = serde_json::to_string_pretty(tasks)?;
    write_file(&config.task_list_path, &s)?;
    log::debug!("Saved {} days to {}", tasks.len(), config.task_list_path.display());
    Ok(())
}

/// Loads all favorites.
pub fn load_favorites(config: &Config) -> Result<Vec<Favorite>> {
    let favorites: Vec<Favorite> = load_json(&config.favorites_path)?.unwrap_or_default();
    log::debug!("Loaded {} favorites from {}", favorites.len(), config.favorites_path.display());
    Ok(favorites)
}

/// Saves the given favorites, overwriting the existing file.
pub fn save_favorites(config: &Config, favorites: &[Favorite]) -> Result<()> {
    let s = serde_json::to_string_pretty(favorites)?;
    write_file(&config.favorites_path, &s)?;
    log::debug!("Saved {} favorites to {}", favorites.len(), config.favorites_path.display());
    Ok(())
}

/// Returns the task list file exactly as stored, empty if it does not exist yet.
pub fn read_task_list_text(config: &Config) -> Result<String> {
    Ok(read_file(&config.task_list_path)?.unwrap_or_default())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match read_file(path)? {
        Some(s) if !s.trim().is_empty() => Ok(Some(serde_json::from_str(&s)?)),
        _ => Ok(None),
    }
}

fn read_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// `s` must be the complete document; the file is truncated on open.
fn write_file(path: &Path, s: &str) -> Result<()> {
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    f.write_all(s.as_bytes())?;
    f.write_all(b"\n")?;
    Ok(())
}
