//! Per-guard sleep aggregation over reconstructed shifts.

use std::collections::BTreeMap;

use guardlog_core::models::{GuardSummary, ShiftRecord};
use tracing::{debug, warn};

// ── MinuteHistogram ───────────────────────────────────────────────────────────

/// Occurrence count for each minute-of-hour (0-59).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinuteHistogram {
    counts: [u32; 60],
}

impl Default for MinuteHistogram {
    fn default() -> Self {
        Self { counts: [0; 60] }
    }
}

impl MinuteHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `minute`. Minutes outside 0-59 are ignored.
    pub fn record(&mut self, minute: u32) {
        match self.counts.get_mut(minute as usize) {
            Some(slot) => *slot += 1,
            None => warn!("Ignoring out-of-range minute {}", minute),
        }
    }

    /// Occurrences of `minute` (0 for out-of-range minutes).
    #[cfg(test)]
    pub fn count(&self, minute: u32) -> u32 {
        self.counts.get(minute as usize).copied().unwrap_or(0)
    }

    /// Sum of every bucket.
    #[cfg(test)]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// `(minute, count)` of the fullest bucket.
    ///
    /// Ties go to the lowest minute. An empty histogram yields `(0, 0)`.
    pub fn most_frequent(&self) -> (u32, u32) {
        let mut best = (0, 0);
        for (minute, &count) in (0u32..).zip(self.counts.iter()) {
            if count > best.1 {
                best = (minute, count);
            }
        }
        best
    }
}

// ── GuardStats ────────────────────────────────────────────────────────────────

/// Running totals for one guard while shifts are folded in.
#[derive(Debug, Clone, Default)]
pub struct GuardStats {
    pub shifts: usize,
    pub total_minutes_asleep: usize,
    pub histogram: MinuteHistogram,
}

impl GuardStats {
    /// Add one shift's asleep minutes to the running totals.
    pub fn add_shift(&mut self, shift: &ShiftRecord) {
        self.shifts += 1;
        self.total_minutes_asleep += shift.minutes_asleep();
        for &minute in &shift.asleep_minutes {
            self.histogram.record(minute);
        }
    }

    fn into_summary(self, guard_id: u32) -> GuardSummary {
        let (most_frequent_minute, most_frequent_minute_count) = self.histogram.most_frequent();
        GuardSummary {
            guard_id,
            shifts: self.shifts,
            total_minutes_asleep: self.total_minutes_asleep,
            most_frequent_minute,
            most_frequent_minute_count,
        }
    }
}

// ── GuardAggregator ───────────────────────────────────────────────────────────

/// Stateless helper that groups shifts by guard.
pub struct GuardAggregator;

impl GuardAggregator {
    /// One [`GuardSummary`] per distinct guard, sorted by ascending guard id.
    pub fn summarize(shifts: &[ShiftRecord]) -> Vec<GuardSummary> {
        // BTreeMap keeps guard ids ordered for deterministic tie-breaks.
        let mut map: BTreeMap<u32, GuardStats> = BTreeMap::new();

        for shift in shifts {
            map.entry(shift.guard_id).or_default().add_shift(shift);
        }

        debug!(
            "GuardAggregator: summarised {} shifts into {} guards",
            shifts.len(),
            map.len()
        );

        map.into_iter()
            .map(|(guard_id, stats)| stats.into_summary(guard_id))
            .collect()
    }

    /// Summary for `guard_id` over `shifts`, ignoring shifts of other guards.
    ///
    /// A guard with no matching shifts gets an all-zero summary.
    #[cfg(test)]
    pub fn summarize_guard(guard_id: u32, shifts: &[ShiftRecord]) -> GuardSummary {
        let mut stats = GuardStats::default();
        for shift in shifts.iter().filter(|s| s.guard_id == guard_id) {
            stats.add_shift(shift);
        }
        stats.into_summary(guard_id)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
