use chrono::{NaiveDateTime, TimeDelta, Timelike};

// ── Minute-of-hour helpers ────────────────────────────────────────────────────

/// Clock minute (0-59) of `ts`, irrespective of hour or day.
pub fn minute_of_hour(ts: NaiveDateTime) -> u32 {
    ts.minute()
}

/// Walk from `fell_asleep` (inclusive) to `woke_up` (exclusive) one minute at
/// a time and collect the minute-of-hour of every step.
///
/// Crossing an hour boundary wraps: 23:58 → 00:03 yields `58, 59, 0, 1, 2`.
/// Returns an empty vector when `woke_up` is not after `fell_asleep`.
///
/// The result holds one element per elapsed minute, so callers must bound
/// the interval first; the shift reconstructor rejects anything longer than
/// a day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use guardlog_core::time_utils::asleep_minutes;
///
/// let day = NaiveDate::from_ymd_opt(1518, 11, 1).unwrap();
/// let asleep = day.and_hms_opt(0, 30, 0).unwrap();
/// let awake = day.and_hms_opt(0, 33, 0).unwrap();
/// assert_eq!(asleep_minutes(asleep, awake), vec![30, 31, 32]);
/// ```
pub fn asleep_minutes(fell_asleep: NaiveDateTime, woke_up: NaiveDateTime) -> Vec<u32> {
    let step = TimeDelta::minutes(1);
    let mut minutes = Vec::new();
    let mut time = fell_asleep;
    while time < woke_up {
        minutes.push(minute_of_hour(time));
        time += step;
    }
    minutes
}

/// Whole minutes between two timestamps, saturating at zero.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    u64::try_from((end - start).num_minutes()).unwrap_or(0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
