//! # tsks
//!
//! A small terminal task tracker that organizes work by day. Tasks are written
//! down for a day, checked off, and flushed once they are old news.
//!
//! ## Features
//!
//! *   **Day-based lists**: every task belongs to a calendar day.
//! *   **Flexible day options**: `t` (today), `t-1`, `t+3`, `2019-01-01`,
//!     `w` (every day) and ranges such as `t-7:t` or `2019-01-01:w`.
//! *   **Favorites**: reusable task templates, added with `add -n <name>`.
//! *   **Plain files**: the task list and the favorites are JSON files.
//!
//! ## Usage
//!
//! ```bash
//! # Add a task for today, or for tomorrow
//! tsks add Write the report
//! tsks add -d t+1 Call the dentist
//!
//! # Today's open tasks, then everything from the last week
//! tsks ls
//! tsks ls -d t-7:t -a
//!
//! # Finish tasks 1 and 3 of today, revive all of yesterday's
//! tsks fin 1,3
//! tsks rev -d t-1 w
//!
//! # Favorites
//! tsks fav standup Daily standup meeting
//! tsks add -n standup
//! tsks fav -d standup
//!
//! # Drop January 2019 and everything before it
//! tsks fls 2019-01-31
//! ```
//!
//! ## Data Storage
//!
//! By default the files live in the local data directory:
//! *   Linux: `~/.local/share/tsks/tasks.json`
//! *   macOS: `~/Library/Application Support/tsks/tasks.json`
//! *   Windows: `%LOCALAPPDATA%\tsks\tasks.json`
//!
//! `~/tsks/tasks.json` is used instead when it exists. The `TSKS_TASK_LIST`
//! and `TSKS_FAVORITES` environment variables override both locations; a
//! leading `$VAR` in them is expanded.
//!
//! Every command reads the whole file and writes it back. Two `tsks`
//! processes running at the same time can overwrite each other's changes.

pub mod commands;
pub mod config;
pub mod day;
pub mod error;
pub mod models;
pub mod storage;

pub use config::Config;
pub use day::DaySpec;
pub use error::{Result, TsksError};
pub use models::{Favorite, Task, TaskList};
