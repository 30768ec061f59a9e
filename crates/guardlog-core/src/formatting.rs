use crate::models::GuardSummary;

/// Format an integer with thousands separators.
///
/// # Examples
///
/// ```
/// use guardlog_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1234), "1,234");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format a duration in minutes as a human-readable string.
///
/// * `< 60` minutes → `"45m"`
/// * `≥ 60` minutes, no remainder → `"3h"`
/// * `≥ 60` minutes, with remainder → `"3h 45m"`
///
/// # Examples
///
/// ```
/// use guardlog_core::formatting::format_time;
///
/// assert_eq!(format_time(45),  "45m");
/// assert_eq!(format_time(180), "3h");
/// assert_eq!(format_time(225), "3h 45m");
/// ```
pub fn format_time(minutes: u64) -> String {
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        let hours = minutes / 60;
        let mins = minutes % 60;
        if mins == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, mins)
        }
    }
}

/// Render per-guard summaries as a fixed-width table, one row per guard in
/// the order given.
pub fn format_summary_table(summaries: &[GuardSummary]) -> String {
    let mut out = format_row(["GUARD", "SHIFTS", "ASLEEP", "TOP MIN", "TIMES"].map(String::from));
    for s in summaries {
        out.push_str(&format_row([
            format!("#{}", s.guard_id),
            format_count(s.shifts as u64),
            format_time(s.total_minutes_asleep as u64),
            format!(":{:02}", s.most_frequent_minute),
            format_count(u64::from(s.most_frequent_minute_count)),
        ]));
    }
    out
}

/// One `label: value` line per requested answer.
pub fn format_answers(sleepiest: Option<u64>, most_frequent: Option<u64>) -> String {
    let mut out = String::new();
    if let Some(score) = sleepiest {
        out.push_str(&format!("Sleepiest guard score: {}\n", score));
    }
    if let Some(score) = most_frequent {
        out.push_str(&format!("Most frequent sleeper score: {}\n", score));
    }
    out
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Right-align the five table columns.
fn format_row(cells: [String; 5]) -> String {
    let [guard, shifts, asleep, minute, times] = cells;
    format!(
        "{:>8}  {:>6}  {:>10}  {:>8}  {:>6}\n",
        guard, shifts, asleep, minute, times
    )
}

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
