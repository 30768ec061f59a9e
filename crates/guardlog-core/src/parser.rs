//! Line parsing for guard logs.
//!
//! Both functions are pure: the compiled patterns are immutable once built
//! and shared between callers.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::error::{GuardLogError, Result};
use crate::models::LogEntry;

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\[([0-9]{4})-([0-9]{2})-([0-9]{2}) ([0-9]{2}):([0-9]{2})\] (.*)$")
            .expect("regex is valid")
    })
}

fn guard_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#([0-9]+)").expect("regex is valid"))
}

/// Parse `[YYYY-MM-DD HH:MM] <action>` into a [`LogEntry`].
///
/// The action suffix is kept verbatim. Lines that do not match the grammar,
/// or whose date/time is not a real calendar minute, yield
/// [`GuardLogError::Parse`].
///
/// # Examples
///
/// ```
/// use guardlog_core::parser::parse_log_entry;
///
/// let entry = parse_log_entry("[1518-11-01 00:00] Guard #10 begins shift").unwrap();
/// assert_eq!(entry.timestamp.to_string(), "1518-11-01 00:00:00");
/// assert_eq!(entry.action, "Guard #10 begins shift");
/// ```
pub fn parse_log_entry(line: &str) -> Result<LogEntry> {
    let caps = line_regex()
        .captures(line)
        .ok_or_else(|| parse_error(line, "expected \"[YYYY-MM-DD HH:MM] <action>\""))?;

    let field = |i: usize| {
        caps[i]
            .parse::<u32>()
            .map_err(|_| parse_error(line, "date or time component is not a number"))
    };
    let year = caps[1]
        .parse::<i32>()
        .map_err(|_| parse_error(line, "year is not a number"))?;

    let timestamp = build_timestamp(year, field(2)?, field(3)?, field(4)?, field(5)?)
        .ok_or_else(|| parse_error(line, "date or time out of range"))?;

    Ok(LogEntry::new(timestamp, &caps[6]))
}

/// Extract the guard id from action text containing `#<digits>`.
///
/// # Examples
///
/// ```
/// use guardlog_core::parser::parse_guard_id;
///
/// assert_eq!(parse_guard_id("Guard #333333 begins shift").unwrap(), 333_333);
/// assert!(parse_guard_id("falls asleep").is_err());
/// ```
pub fn parse_guard_id(action: &str) -> Result<u32> {
    let caps = guard_id_regex()
        .captures(action)
        .ok_or_else(|| GuardLogError::MissingGuardId(action.to_string()))?;

    let id = caps[1]
        .parse::<u32>()
        .map_err(|_| parse_error(action, "guard id out of range"))?;

    if id == 0 {
        return Err(parse_error(action, "guard id must be positive"));
    }
    Ok(id)
}

fn build_timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

fn parse_error(line: &str, reason: &str) -> GuardLogError {
    GuardLogError::Parse {
        line: line.to_string(),
        reason: reason.to_string(),
    }
}
