use chrono::{Days, Local, NaiveDate};
use crate::error::{Result, TsksError};

/// Format of a day key, both on the command line and in the task list.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Today.
pub const TODAY: &str = "t";
/// Every day, when used alone or as one end of a range.
pub const WILDCARD: &str = "w";

/// The earliest day a day option can name (`0001-01-01`).
pub fn min_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// The latest day a day option can name (`3000-12-31`).
pub fn max_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(3000, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// A resolved day option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySpec {
    /// One exact day, from a bare token such as `t-1` or `2019-01-01`.
    Single(NaiveDate),
    /// Every day from `start` to `end`, both inclusive.
    Range { start: NaiveDate, end: NaiveDate },
}

impl DaySpec {
    /// Returns the exact day, or fails if the option named a range.
    ///
    /// `expr` is the option as typed, used for the error message.
    pub fn single_day(self, expr: &str) -> Result<NaiveDate> {
        match self {
            DaySpec::Single(day) => Ok(day),
            DaySpec::Range { .. } => Err(TsksError::InvalidDateExpression(expr.to_string())),
        }
    }
}

#[derive(Clone, Copy)]
enum Endpoint {
    Start,
    End,
}

/// Resolves a day option against the current local date.
///
/// The clock is read on every call, so `t` follows the date across midnight.
pub fn resolve(expr: &str) -> Result<DaySpec> {
    resolve_at(expr, Local::now().date_naive())
}

/// Resolves a day option with `today` as the meaning of `t`.
///
/// Accepted forms:
/// - `t`, `t+N`, `t-N`: today, or N days after/before it.
/// - `YYYY-MM-DD`: that day.
/// - `w`: every day.
/// - `<start>:<end>`: an inclusive range; either end may also be `w`.
pub fn resolve_at(expr: &str, today: NaiveDate) -> Result<DaySpec> {
    let invalid = || TsksError::InvalidDateExpression(expr.to_string());

    if expr == WILDCARD {
        return Ok(DaySpec::Range { start: min_day(), end: max_day() });
    }

    match expr.split_once(':') {
        None => resolve_token(expr, today)
            .map(DaySpec::Single)
            .ok_or_else(invalid),
        Some((start, end)) => {
            if end.contains(':') {
                return Err(invalid());
            }
            let start = resolve_endpoint(start, Endpoint::Start, today).ok_or_else(invalid)?;
            let end = resolve_endpoint(end, Endpoint::End, today).ok_or_else(invalid)?;
            Ok(DaySpec::Range { start, end })
        }
    }
}

fn resolve_endpoint(token: &str, endpoint: Endpoint, today: NaiveDate) -> Option<NaiveDate> {
    if token == WILDCARD {
        return Some(match endpoint {
            Endpoint::Start => min_day(),
            Endpoint::End => max_day(),
        });
    }
    resolve_token(token, today)
}

fn resolve_token(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    if token == TODAY {
        return Some(today);
    }
    if let Some(day) = parse_day(token) {
        return Some(day);
    }

    let (forward, offset) = if let Some(n) = token.strip_prefix("t+") {
        (true, n)
    } else if let Some(n) = token.strip_prefix("t-") {
        (false, n)
    } else {
        return None;
    };
    // `str::parse` would also take a leading sign
    if offset.is_empty() || !offset.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let days = Days::new(offset.parse().ok()?);
    let day = if forward {
        today.checked_add_days(days)
    } else {
        today.checked_sub_days(days)
    };
    day.filter(|d| in_domain(*d))
}

/// Parses a canonical `YYYY-MM-DD` day within `[0001-01-01, 3000-12-31]`.
///
/// Non-padded forms such as `2019-1-1` are rejected so that a day key has
/// exactly one spelling.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    let day = NaiveDate::parse_from_str(s, DAY_FORMAT).ok()?;
    (day.format(DAY_FORMAT).to_string() == s && in_domain(day)).then_some(day)
}

fn in_domain(day: NaiveDate) -> bool {
    min_day() <= day && day <= max_day()
}
