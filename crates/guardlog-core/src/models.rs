use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{GuardLogError, Result};

/// One line of the guard log: when something happened and what was written.
///
/// Entries compare by timestamp first and action text second, which is the
/// chronological order the sequencer relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogEntry {
    /// Minute-resolution timestamp from the `[YYYY-MM-DD HH:MM]` prefix.
    pub timestamp: NaiveDateTime,
    /// Free-text tail of the line, kept verbatim.
    pub action: String,
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, action: impl Into<String>) -> Self {
        Self {
            timestamp,
            action: action.into(),
        }
    }

    /// Classify the action text of this entry.
    pub fn guard_action(&self) -> Result<GuardAction> {
        self.action.parse()
    }
}

/// What a guard did at a given minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardAction {
    BeginsShift,
    FallsAsleep,
    WakesUp,
}

impl GuardAction {
    /// Phrase that identifies each action inside free-text log lines.
    /// The three phrases are disjoint, so match order never matters.
    const PHRASES: [(&'static str, GuardAction); 3] = [
        ("begins shift", GuardAction::BeginsShift),
        ("falls asleep", GuardAction::FallsAsleep),
        ("wakes up", GuardAction::WakesUp),
    ];

    /// Derive the action from free text by substring matching.
    pub fn from_action(action: &str) -> Result<Self> {
        Self::PHRASES
            .iter()
            .find(|(phrase, _)| action.contains(phrase))
            .map(|(_, kind)| *kind)
            .ok_or_else(|| GuardLogError::UnknownAction(action.to_string()))
    }

    /// The canonical phrase for this action.
    pub fn phrase(&self) -> &'static str {
        match self {
            GuardAction::BeginsShift => "begins shift",
            GuardAction::FallsAsleep => "falls asleep",
            GuardAction::WakesUp => "wakes up",
        }
    }
}

impl FromStr for GuardAction {
    type Err = GuardLogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_action(s)
    }
}

impl fmt::Display for GuardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// A single guard's shift and every minute-of-hour they were asleep in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Positive guard identifier taken from `Guard #<id> begins shift`.
    pub guard_id: u32,
    /// Timestamp of the shift-start event.
    pub shift_start: NaiveDateTime,
    /// Minutes (0-59) recorded asleep, in the order they were walked.
    #[serde(default)]
    pub asleep_minutes: Vec<u32>,
}

impl ShiftRecord {
    /// Open a shift with no sleep recorded yet.
    pub fn new(guard_id: u32, shift_start: NaiveDateTime) -> Self {
        Self {
            guard_id,
            shift_start,
            asleep_minutes: Vec::new(),
        }
    }

    /// Number of minutes asleep during this shift.
    pub fn minutes_asleep(&self) -> usize {
        self.asleep_minutes.len()
    }
}

/// Per-guard sleep statistics across all of that guard's shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardSummary {
    pub guard_id: u32,
    /// Number of shifts the guard worked.
    pub shifts: usize,
    /// Sum of asleep minutes over every shift.
    pub total_minutes_asleep: usize,
    /// Minute-of-hour the guard was most often asleep (0 when never asleep).
    pub most_frequent_minute: u32,
    /// How many times the guard was asleep during `most_frequent_minute`.
    pub most_frequent_minute_count: u32,
}

impl GuardSummary {
    /// `guard_id * most_frequent_minute`, the value both queries report.
    pub fn score(&self) -> u64 {
        u64::from(self.guard_id) * u64::from(self.most_frequent_minute)
    }
}
