//! The two summary questions asked of a guard log.
//!
//! Both selections keep the first maximum in iteration order. Summaries from
//! [`GuardAggregator::summarize`](crate::aggregator::GuardAggregator::summarize)
//! come sorted by guard id, so ties resolve to the lowest id.

use guardlog_core::models::GuardSummary;

/// The guard with the most minutes asleep in total.
pub fn find_sleepiest_guard(summaries: &[GuardSummary]) -> Option<&GuardSummary> {
    first_max_by_key(summaries, |s| s.total_minutes_asleep as u64)
}

/// The guard most often asleep on the same minute.
pub fn find_most_frequent_sleeper(summaries: &[GuardSummary]) -> Option<&GuardSummary> {
    first_max_by_key(summaries, |s| u64::from(s.most_frequent_minute_count))
}

/// `guard_id * most_frequent_minute` of the sleepiest guard, or 0 when
/// there are no summaries.
pub fn sleepiest_guard(summaries: &[GuardSummary]) -> u64 {
    find_sleepiest_guard(summaries).map_or(0, GuardSummary::score)
}

/// `guard_id * most_frequent_minute` of the most frequent sleeper, or 0
/// when there are no summaries.
pub fn most_frequent_sleeper(summaries: &[GuardSummary]) -> u64 {
    find_most_frequent_sleeper(summaries).map_or(0, GuardSummary::score)
}

fn first_max_by_key<F>(summaries: &[GuardSummary], key: F) -> Option<&GuardSummary>
where
    F: Fn(&GuardSummary) -> u64,
{
    // `Iterator::max_by_key` returns the last maximum; keep the first instead.
    summaries
        .iter()
        .reduce(|best, s| if key(s) > key(best) { s } else { best })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::GuardAggregator;
    use chrono::{NaiveDate, NaiveDateTime};
    use guardlog_core::models::ShiftRecord;

    fn ts(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1518, 11, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn shift(guard_id: u32, day: u32, hour: u32, minutes: impl IntoIterator<Item = u32>) -> ShiftRecord {
        ShiftRecord {
            guard_id,
            shift_start: ts(day, hour),
            asleep_minutes: minutes.into_iter().collect(),
        }
    }

    fn summary(guard_id: u32, total: usize, minute: u32, count: u32) -> GuardSummary {
        GuardSummary {
            guard_id,
            shifts: 1,
            total_minutes_asleep: total,
            most_frequent_minute: minute,
            most_frequent_minute_count: count,
        }
    }

    #[test]
    fn test_sleepiest_guard_simple() {
        let summaries = GuardAggregator::summarize(&[
            shift(2, 1, 0, 10..=13),
            shift(4, 2, 0, [15]),
            shift(2, 1, 4, 13..=16),
            shift(4, 2, 5, 15..=33),
        ]);
        assert_eq!(sleepiest_guard(&summaries), 4 * 15);
    }

    #[test]
    fn test_empty_summaries_yield_zero() {
        assert_eq!(sleepiest_guard(&[]), 0);
        assert_eq!(most_frequent_sleeper(&[]), 0);
        assert!(find_sleepiest_guard(&[]).is_none());
        assert!(find_most_frequent_sleeper(&[]).is_none());
    }

    #[test]
    fn test_queries_can_pick_different_guards() {
        // Guard 10 sleeps longer overall; guard 99 repeats minute 45 more often.
        let summaries = [summary(10, 50, 24, 2), summary(99, 30, 45, 3)];
        assert_eq!(find_sleepiest_guard(&summaries).unwrap().guard_id, 10);
        assert_eq!(find_most_frequent_sleeper(&summaries).unwrap().guard_id, 99);
        assert_eq!(sleepiest_guard(&summaries), 240);
        assert_eq!(most_frequent_sleeper(&summaries), 4455);
    }

    #[test]
    fn test_ties_keep_first_encountered() {
        let summaries = [summary(3, 20, 7, 4), summary(8, 20, 9, 4)];
        assert_eq!(find_sleepiest_guard(&summaries).unwrap().guard_id, 3);
        assert_eq!(find_most_frequent_sleeper(&summaries).unwrap().guard_id, 3);
    }

    #[test]
    fn test_guard_never_asleep_scores_zero() {
        let summaries = [summary(17, 0, 0, 0)];
        assert_eq!(sleepiest_guard(&summaries), 0);
        assert_eq!(most_frequent_sleeper(&summaries), 0);
    }
}
