use std::io::Write;
use chrono::NaiveDate;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crate::config::Config;
use crate::day::{self, DaySpec, TODAY, WILDCARD};
use crate::error::{Result, TsksError};
use crate::models::{Favorite, Task};
use crate::storage::{load_favorites, load_tasks, read_task_list_text, save_favorites, save_tasks};

/// Adds a task to the day named by `day_expr`.
///
/// The content is `words` joined by spaces. With `from_favorite`, the first
/// word names a favorite instead and the task copies its name and content.
pub fn cmd_add(config: &Config, words: &[String], from_favorite: bool, day_expr: &str) -> Result<()> {
    let day = day::resolve(day_expr)?.single_day(day_expr)?;

    let task = if from_favorite {
        let name = words.first().ok_or(TsksError::EmptyContent)?;
        Task::from_favorite(&lookup_favorite(config, name)?)
    } else {
        Task::new(words.join(" "))
    };
    if task.content.trim().is_empty() {
        return Err(TsksError::EmptyContent);
    }

    let mut tasks = load_tasks(config)?;
    tasks.push(day, task);
    save_tasks(config, &tasks)?;
    log::info!("Task added to {}", day);
    Ok(())
}

/// Writes the tasks of a day or a range of days to `out`.
///
/// Finished tasks are hidden unless `include_fin`. In range mode, days whose
/// tasks are all finished are skipped too, and the most recent day comes first.
pub fn cmd_list<W: Write>(config: &Config, day_expr: &str, include_fin: bool, out: &mut W) -> Result<()> {
    let spec = day::resolve(day_expr)?;
    let tasks = load_tasks(config)?;

    match spec {
        DaySpec::Single(day) => match tasks.day(day) {
            Some(day_tasks) => write_day(out, day, day_tasks, include_fin),
            // nothing planned today is not worth an error
            None if day_expr == TODAY => Ok(()),
            None => Err(TsksError::NoTasksForDay(day)),
        },
        DaySpec::Range { start, end } => {
            for (day, day_tasks) in tasks.between(start, end).rev() {
                if include_fin || day_tasks.iter().any(|t| !t.is_fin) {
                    write_day(out, day, day_tasks, include_fin)?;
                }
            }
            Ok(())
        }
    }
}

/// Writes the stored task list file to `out` as is.
pub fn cmd_list_raw<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let text = read_task_list_text(config)?;
    writeln!(out, "{}", text.trim_end())?;
    Ok(())
}

fn write_day<W: Write>(out: &mut W, day: NaiveDate, tasks: &[Task], include_fin: bool) -> Result<()> {
    writeln!(out, "# {}", day)?;
    for (i, task) in tasks.iter().enumerate() {
        if let Some(line) = task.line(i + 1, include_fin) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

enum Selection {
    All,
    Numbers(Vec<usize>),
}

fn parse_selection(selector: &str, day: NaiveDate, count: usize) -> Result<Selection> {
    // a leading `w` selects the whole day, whatever follows it
    if selector.split(',').next().map(str::trim) == Some(WILDCARD) {
        return Ok(Selection::All);
    }
    let mut numbers = Vec::new();
    for token in selector.split(',') {
        let token = token.trim();
        let index: usize = token
            .parse()
            .map_err(|_| TsksError::InvalidNumberFormat(token.to_string()))?;
        if index == 0 || index > count {
            return Err(TsksError::TaskIndexOutOfRange { day, index });
        }
        numbers.push(index);
    }
    Ok(Selection::Numbers(numbers))
}

/// Marks tasks of a day as finished (`finished = true`) or revives them.
///
/// `selector` starts with `w` for every task of the day, or lists comma-separated task
/// numbers as shown by `ls`. Every number is checked before anything changes.
pub fn cmd_finish_or_revive(config: &Config, day_expr: &str, selector: &str, finished: bool) -> Result<()> {
    let day = day::resolve(day_expr)?.single_day(day_expr)?;
    let mut tasks = load_tasks(config)?;
    let day_tasks = tasks.day_mut(day).ok_or(TsksError::NoTasksForDay(day))?;

    match parse_selection(selector, day, day_tasks.len())? {
        Selection::All => {
            for t in day_tasks.iter_mut() {
                t.is_fin = finished;
            }
        }
        Selection::Numbers(numbers) => {
            for n in numbers {
                day_tasks[n - 1].is_fin = finished;
            }
        }
    }

    save_tasks(config, &tasks)?;
    log::info!("Tasks {} at {} marked {}", selector, day, if finished { "finished" } else { "in progress" });
    Ok(())
}

/// Deletes whole days from the task list and returns how many were removed.
///
/// A single day removes that day and every day before it; a range removes
/// the days inside it. Matching nothing is not an error.
pub fn cmd_flush(config: &Config, day_expr: &str) -> Result<usize> {
    let spec = day::resolve(day_expr)?;
    let mut tasks = load_tasks(config)?;
    let removed = match spec {
        DaySpec::Single(last) => tasks.remove_days(|d| d <= last),
        DaySpec::Range { start, end } => tasks.remove_days(|d| start <= d && d <= end),
    };
    save_tasks(config, &tasks)?;
    log::info!("Flushed {} days", removed);
    Ok(removed)
}

/// Handles `fav`: lists all favorites without a name, deletes the named one
/// with `delete` (any content is ignored), shows it without content, and
/// otherwise adds or updates it with `content` joined by spaces.
pub fn cmd_fav<W: Write>(
    config: &Config,
    delete: bool,
    name: Option<&str>,
    content: &[String],
    out: &mut W,
) -> Result<()> {
    match name {
        None => cmd_fav_list(config, out),
        Some(name) if delete => cmd_fav_delete(config, name),
        Some(name) if content.is_empty() => cmd_fav_show(config, name, out),
        Some(name) => cmd_fav_set(config, name, &content.join(" ")),
    }
}

/// Finds a favorite by name.
pub fn lookup_favorite(config: &Config, name: &str) -> Result<Favorite> {
    load_favorites(config)?
        .into_iter()
        .find(|f| f.name == name)
        .ok_or_else(|| TsksError::FavoriteNotFound(name.to_string()))
}

/// Lists all favorites in a table.
pub fn cmd_fav_list<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let favorites = load_favorites(config)?;
    if favorites.is_empty() {
        return Err(TsksError::NoFavorites);
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Content").add_attribute(Attribute::Bold),
        ]);
    for f in favorites {
        table.add_row(vec![f.name, f.content]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}

/// Shows one favorite.
pub fn cmd_fav_show<W: Write>(config: &Config, name: &str, out: &mut W) -> Result<()> {
    let f = lookup_favorite(config, name)?;
    writeln!(out, " - {} : {}", f.name, f.content)?;
    Ok(())
}

/// Adds a favorite, or replaces the content of the one with the same name.
pub fn cmd_fav_set(config: &Config, name: &str, content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(TsksError::EmptyContent);
    }
    let mut favorites = load_favorites(config)?;
    match favorites.iter_mut().find(|f| f.name == name) {
        Some(f) => {
            f.content = content.to_string();
            log::info!("Favorite '{}' updated", name);
        }
        None => {
            favorites.push(Favorite { name: name.to_string(), content: content.to_string() });
            log::info!("Favorite '{}' added", name);
        }
    }
    save_favorites(config, &favorites)
}

/// Removes a favorite. Tasks already created from it keep its name.
pub fn cmd_fav_delete(config: &Config, name: &str) -> Result<()> {
    let mut favorites = load_favorites(config)?;
    let len_before = favorites.len();
    favorites.retain(|f| f.name != name);
    if favorites.len() == len_before {
        return Err(TsksError::FavoriteNotFound(name.to_string()));
    }
    save_favorites(config, &favorites)?;
    log::info!("Favorite '{}' removed", name);
    Ok(())
}
