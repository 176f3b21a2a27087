use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use crate::day::parse_day;

/// A single task on a day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    /// Name of the favorite this task was created from, empty for ad hoc tasks.
    #[serde(default)]
    pub name: String,
    /// What has to be done.
    pub content: String,
    /// Whether the task has been finished.
    #[serde(rename = "isFin", default)]
    pub is_fin: bool,
}

impl Task {
    /// Creates an unfinished ad hoc task.
    pub fn new(content: impl Into<String>) -> Self {
        Task { name: String::new(), content: content.into(), is_fin: false }
    }

    /// Creates an unfinished task from a favorite, keeping its name.
    pub fn from_favorite(favorite: &Favorite) -> Self {
        Task { name: favorite.name.clone(), content: favorite.content.clone(), is_fin: false }
    }

    /// Formats the task as its list line, numbered `number`.
    ///
    /// Returns `None` when the task is finished and finished tasks are hidden.
    pub fn line(&self, number: usize, include_fin: bool) -> Option<String> {
        if self.is_fin && !include_fin {
            return None;
        }
        let marker = if self.is_fin { "fin" } else { "wip" };
        let mut line = format!(" [{}] {}. {}", marker, number, self.content);
        if !self.name.is_empty() {
            line.push_str(&format!(" ({})", self.name));
        }
        Some(line)
    }
}

/// A reusable task template.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Favorite {
    /// The unique name of the favorite.
    pub name: String,
    /// Content given to tasks created from it.
    pub content: String,
}

/// All tasks, keyed by day.
///
/// A day is present only while it holds at least one task.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct TaskList {
    days: BTreeMap<NaiveDate, Vec<Task>>,
}

// Keys must be canonical days: chrono alone would read "2019-1-1" as
// 2019-01-01 and let it overwrite the real entry.
impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Vec<Task>>::deserialize(deserializer)?;
        let mut days = BTreeMap::new();
        for (key, tasks) in raw {
            let day = parse_day(&key)
                .ok_or_else(|| de::Error::custom(format!("invalid day '{}'", key)))?;
            days.insert(day, tasks);
        }
        Ok(TaskList { days })
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks of `day` in insertion order.
    pub fn day(&self, day: NaiveDate) -> Option<&[Task]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    /// Tasks of `day`, for flipping their finished state.
    pub fn day_mut(&mut self, day: NaiveDate) -> Option<&mut [Task]> {
        self.days.get_mut(&day).map(Vec::as_mut_slice)
    }

    /// Appends `task` to `day`, creating the day if needed.
    pub fn push(&mut self, day: NaiveDate, task: Task) {
        self.days.entry(day).or_default().push(task);
    }

    /// Days from `start` to `end` inclusive, in ascending order.
    pub fn between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl DoubleEndedIterator<Item = (NaiveDate, &[Task])> + '_ {
        // BTreeMap::range panics on an inverted range
        let bounds = if start <= end { Some(start..=end) } else { None };
        bounds
            .into_iter()
            .flat_map(move |r| self.days.range(r))
            .map(|(day, tasks)| (*day, tasks.as_slice()))
    }

    /// Removes every day matching `pred` and returns how many were removed.
    pub fn remove_days<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(NaiveDate) -> bool,
    {
        let before = self.days.len();
        self.days.retain(|day, _| !pred(*day));
        before - self.days.len()
    }

    /// Drops days left without tasks.
    pub fn prune(&mut self) {
        self.days.retain(|_, tasks| !tasks.is_empty());
    }

    /// Number of days holding tasks.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
