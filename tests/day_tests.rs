use tsks::day::{max_day, min_day, parse_day, resolve, resolve_at, DaySpec};
use tsks::TsksError;
use chrono::{Duration, Local, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixed_today() -> NaiveDate {
    date(2019, 3, 1)
}

#[test]
fn test_literal_day_is_returned_unchanged() {
    for s in ["2019-01-01", "2020-02-29", "0001-01-01", "3000-12-31", "1999-12-31"] {
        match resolve_at(s, fixed_today()).unwrap() {
            DaySpec::Single(d) => assert_eq!(d.format("%Y-%m-%d").to_string(), s),
            other => panic!("expected a single day for {}, got {:?}", s, other),
        }
    }
}

#[test]
fn test_today_follows_the_clock() {
    let today = Local::now().date_naive();
    assert_eq!(resolve("t").unwrap(), DaySpec::Single(today));
}

#[test]
fn test_relative_days() {
    let today = fixed_today();
    assert_eq!(resolve_at("t-1", today).unwrap(), DaySpec::Single(date(2019, 2, 28)));
    assert_eq!(resolve_at("t+3", today).unwrap(), DaySpec::Single(date(2019, 3, 4)));
    assert_eq!(resolve_at("t+0", today).unwrap(), DaySpec::Single(today));
    assert_eq!(resolve_at("t-365", today).unwrap(), DaySpec::Single(date(2018, 3, 1)));

    // going forward then back by the same offset lands on today
    let forward = resolve_at("t+40", today).unwrap().single_day("t+40").unwrap();
    let back = resolve_at("t-40", forward).unwrap().single_day("t-40").unwrap();
    assert_eq!(back, today);
}

#[test]
fn test_relative_days_against_the_clock() {
    let today = Local::now().date_naive();
    let yesterday = resolve("t-1").unwrap().single_day("t-1").unwrap();
    assert_eq!(yesterday, today - Duration::days(1));
}

#[test]
fn test_wildcard_is_every_day() {
    assert_eq!(
        resolve_at("w", fixed_today()).unwrap(),
        DaySpec::Range { start: min_day(), end: max_day() }
    );
    assert_eq!(min_day(), date(1, 1, 1));
    assert_eq!(max_day(), date(3000, 12, 31));
}

#[test]
fn test_ranges() {
    let today = fixed_today();
    assert_eq!(
        resolve_at("2019-01-01:2019-02-28", today).unwrap(),
        DaySpec::Range { start: date(2019, 1, 1), end: date(2019, 2, 28) }
    );
    assert_eq!(
        resolve_at("t-7:t", today).unwrap(),
        DaySpec::Range { start: date(2019, 2, 22), end: today }
    );
    assert_eq!(
        resolve_at("t:w", today).unwrap(),
        DaySpec::Range { start: today, end: max_day() }
    );
    assert_eq!(
        resolve_at("w:2019-01-01", today).unwrap(),
        DaySpec::Range { start: min_day(), end: date(2019, 1, 1) }
    );
}

#[test]
fn test_invalid_expressions() {
    let today = fixed_today();
    for s in [
        "bogus", "", "2019-13-01", "2019-02-30", "2019-1-1", "t+", "t-", "t+-3", "t++3", "t-x",
        "x+1", "T", "t:", ":t", "t:t:t", "w:w:w", "0000-01-01", "3001-01-01", "t*2",
    ] {
        match resolve_at(s, today) {
            Err(TsksError::InvalidDateExpression(e)) => assert_eq!(e, s),
            other => panic!("expected an error for {:?}, got {:?}", s, other),
        }
    }
}

#[test]
fn test_offsets_outside_the_calendar_are_rejected() {
    assert!(resolve_at("t+1", max_day()).is_err());
    assert!(resolve_at("t-1", min_day()).is_err());
    assert!(resolve_at("t+99999999999999999999999", fixed_today()).is_err());
}

#[test]
fn test_single_day_rejects_ranges() {
    let spec = resolve_at("t-1:t", fixed_today()).unwrap();
    assert!(matches!(spec.single_day("t-1:t"), Err(TsksError::InvalidDateExpression(_))));
    let spec = resolve_at("t", fixed_today()).unwrap();
    assert_eq!(spec.single_day("t").unwrap(), fixed_today());
}

#[test]
fn test_parse_day() {
    assert_eq!(parse_day("2019-01-01"), Some(date(2019, 1, 1)));
    assert_eq!(parse_day("2019-01-1"), None);
    assert_eq!(parse_day(" 2019-01-01"), None);
    assert_eq!(parse_day("2019/01/01"), None);
}
