use chrono::NaiveDate;
use thiserror::Error;

/// Every failure a `tsks` command can report.
#[derive(Debug, Error)]
pub enum TsksError {
    #[error("Invalid day option '{0}'. Use t, t+N, t-N, YYYY-MM-DD, w or <start>:<end>.")]
    InvalidDateExpression(String),
    #[error("There aren't tasks at {0}.")]
    NoTasksForDay(NaiveDate),
    #[error("'{0}' is not a task number.")]
    InvalidNumberFormat(String),
    #[error("There is no task {index} at {day}.")]
    TaskIndexOutOfRange { day: NaiveDate, index: usize },
    #[error("Task content must not be empty.")]
    EmptyContent,
    #[error("Favorite '{0}' does not exist.")]
    FavoriteNotFound(String),
    #[error("There aren't any favorites.")]
    NoFavorites,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse stored data: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TsksError>;
