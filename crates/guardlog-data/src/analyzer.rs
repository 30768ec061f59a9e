//! Shift reconstruction for guard logs.
//!
//! Folds a chronologically sorted sequence of [`LogEntry`] values into one
//! [`ShiftRecord`] per `begins shift` event. The scan is an explicit state
//! machine so each transition can be exercised on its own.

use chrono::NaiveDateTime;
use guardlog_core::error::{GuardLogError, Result};
use guardlog_core::models::{GuardAction, LogEntry, ShiftRecord};
use guardlog_core::parser::parse_guard_id;
use guardlog_core::time_utils::{asleep_minutes, minutes_between};
use tracing::{debug, warn};

/// Longest sleep interval accepted between a `falls asleep` and its
/// `wakes up`.
pub const MAX_SLEEP_MINUTES: u64 = 24 * 60;

// ── ScanState ─────────────────────────────────────────────────────────────────

/// Where the scan is between two log entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    /// No shift has begun yet.
    #[default]
    Idle,
    /// A shift is open and its guard is awake.
    OnDuty(ShiftRecord),
    /// A shift is open and its guard fell asleep at `since`.
    Asleep {
        shift: ShiftRecord,
        since: NaiveDateTime,
    },
}

impl ScanState {
    /// The shift under construction, if any.
    pub fn current_shift(&self) -> Option<&ShiftRecord> {
        match self {
            ScanState::Idle => None,
            ScanState::OnDuty(shift) | ScanState::Asleep { shift, .. } => Some(shift),
        }
    }

    /// Timestamp of an unmatched `falls asleep`, if any.
    pub fn pending_sleep_start(&self) -> Option<NaiveDateTime> {
        match self {
            ScanState::Asleep { since, .. } => Some(*since),
            _ => None,
        }
    }
}

// ── ShiftReconstructor ────────────────────────────────────────────────────────

/// Accumulator threaded through the scan: finished shifts plus the current
/// [`ScanState`].
#[derive(Debug, Clone, Default)]
pub struct ShiftReconstructor {
    completed: Vec<ShiftRecord>,
    state: ScanState,
}

impl ShiftReconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Shifts already closed by a later `begins shift`.
    pub fn completed(&self) -> &[ShiftRecord] {
        &self.completed
    }

    /// Apply one entry and return the next accumulator.
    ///
    /// Entries must arrive in chronological order. Events that cannot happen
    /// in the current state fail with [`GuardLogError::MalformedLog`];
    /// unrecognised action text fails with [`GuardLogError::UnknownAction`].
    pub fn apply(mut self, entry: &LogEntry) -> Result<Self> {
        let action = entry.guard_action()?;
        let state = std::mem::take(&mut self.state);

        self.state = match (state, action) {
            (state, GuardAction::BeginsShift) => {
                let guard_id = parse_guard_id(&entry.action)?;
                match state {
                    ScanState::Idle => {}
                    ScanState::OnDuty(shift) => self.completed.push(shift),
                    ScanState::Asleep { shift, since } => {
                        warn!(
                            "Guard #{} never woke up after falling asleep at {}; discarding open interval",
                            shift.guard_id, since
                        );
                        self.completed.push(shift);
                    }
                }
                ScanState::OnDuty(ShiftRecord::new(guard_id, entry.timestamp))
            }

            (ScanState::Idle, GuardAction::FallsAsleep) => {
                return Err(malformed(entry, "falls asleep before any shift has begun"));
            }
            (ScanState::OnDuty(shift), GuardAction::FallsAsleep) => ScanState::Asleep {
                shift,
                since: entry.timestamp,
            },
            (ScanState::Asleep { shift, since }, GuardAction::FallsAsleep) => {
                warn!(
                    "Guard #{} fell asleep again at {} while asleep since {}; keeping the later time",
                    shift.guard_id, entry.timestamp, since
                );
                ScanState::Asleep {
                    shift,
                    since: entry.timestamp,
                }
            }

            (ScanState::Idle, GuardAction::WakesUp) => {
                return Err(malformed(entry, "wakes up before any shift has begun"));
            }
            (ScanState::OnDuty(_), GuardAction::WakesUp) => {
                return Err(malformed(entry, "wakes up without having fallen asleep"));
            }
            (ScanState::Asleep { mut shift, since }, GuardAction::WakesUp) => {
                if entry.timestamp <= since {
                    return Err(malformed(
                        entry,
                        &format!("wakes up no later than falling asleep at {}", since),
                    ));
                }
                let elapsed = minutes_between(since, entry.timestamp);
                if elapsed > MAX_SLEEP_MINUTES {
                    return Err(malformed(
                        entry,
                        &format!(
                            "slept {} minutes since {}, longer than {} allowed",
                            elapsed, since, MAX_SLEEP_MINUTES
                        ),
                    ));
                }
                shift
                    .asleep_minutes
                    .extend(asleep_minutes(since, entry.timestamp));
                ScanState::OnDuty(shift)
            }
        };

        Ok(self)
    }

    /// Close the open shift, if any, and return every shift in encounter order.
    pub fn finish(mut self) -> Vec<ShiftRecord> {
        match self.state {
            ScanState::Idle => {}
            ScanState::OnDuty(shift) => self.completed.push(shift),
            ScanState::Asleep { shift, since } => {
                warn!(
                    "Log ended while guard #{} was asleep since {}; discarding open interval",
                    shift.guard_id, since
                );
                self.completed.push(shift);
            }
        }
        self.completed
    }
}

/// Rebuild every shift from chronologically sorted entries.
///
/// Produces exactly one [`ShiftRecord`] per `begins shift` entry, in the
/// order they were encountered. The first structural violation aborts the
/// whole scan.
pub fn reconstruct_shifts(entries: &[LogEntry]) -> Result<Vec<ShiftRecord>> {
    let shifts = entries
        .iter()
        .try_fold(ShiftReconstructor::new(), ShiftReconstructor::apply)?
        .finish();

    debug!(
        "ShiftReconstructor: rebuilt {} shifts from {} entries",
        shifts.len(),
        entries.len()
    );
    Ok(shifts)
}

fn malformed(entry: &LogEntry, reason: &str) -> GuardLogError {
    GuardLogError::MalformedLog {
        timestamp: entry.timestamp,
        reason: reason.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
