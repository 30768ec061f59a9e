//! Main analysis pipeline for guard logs.
//!
//! Runs parse → sequence → reconstruct → aggregate → query over a batch of
//! raw lines and exposes the two score entry points.

use std::path::Path;

use guardlog_core::error::Result;
use guardlog_core::models::{GuardSummary, ShiftRecord};
use guardlog_core::settings::AnalysisOptions;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aggregator::GuardAggregator;
use crate::analyzer::reconstruct_shifts;
use crate::queries::{most_frequent_sleeper, sleepiest_guard};
use crate::reader::{load_log_input, sequence_entries};

// ── Public types ──────────────────────────────────────────────────────────────

/// Counts gathered while the pipeline ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Raw lines handed to the pipeline.
    pub lines_read: usize,
    /// Entries left after sequencing.
    pub entries_sequenced: usize,
    /// Exact duplicates removed (always 0 unless deduplication is enabled).
    pub duplicates_dropped: usize,
    /// One per `begins shift` entry.
    pub shifts_reconstructed: usize,
    /// Distinct guards seen.
    pub guards: usize,
}

/// The complete output of [`analyze_log`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sleepiest_guard_score: u64,
    pub most_frequent_sleeper_score: u64,
    /// Per-guard summaries, ascending guard id.
    pub summaries: Vec<GuardSummary>,
    /// Every shift in chronological order.
    pub shifts: Vec<ShiftRecord>,
    pub metadata: AnalysisMetadata,
}

impl AnalysisResult {
    /// Pretty-printed JSON rendering of the full result.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline once and keep every intermediate result.
pub fn analyze_log<S: AsRef<str>>(lines: &[S], options: &AnalysisOptions) -> Result<AnalysisResult> {
    let entries = sequence_entries(lines, options)?;
    let shifts = reconstruct_shifts(&entries)?;
    let summaries = GuardAggregator::summarize(&shifts);

    let metadata = AnalysisMetadata {
        lines_read: lines.len(),
        entries_sequenced: entries.len(),
        duplicates_dropped: lines.len() - entries.len(),
        shifts_reconstructed: shifts.len(),
        guards: summaries.len(),
    };

    info!(
        "Analysed {} lines: {} shifts across {} guards",
        metadata.lines_read, metadata.shifts_reconstructed, metadata.guards
    );

    Ok(AnalysisResult {
        sleepiest_guard_score: sleepiest_guard(&summaries),
        most_frequent_sleeper_score: most_frequent_sleeper(&summaries),
        summaries,
        shifts,
        metadata,
    })
}

/// Per-guard summaries for a batch of raw lines.
pub fn summarize_log<S: AsRef<str>>(lines: &[S], options: &AnalysisOptions) -> Result<Vec<GuardSummary>> {
    let entries = sequence_entries(lines, options)?;
    let shifts = reconstruct_shifts(&entries)?;
    Ok(GuardAggregator::summarize(&shifts))
}

/// Score of the guard with the most total minutes asleep.
pub fn compute_sleepiest_guard_score<S: AsRef<str>>(lines: &[S]) -> Result<u64> {
    summarize_log(lines, &AnalysisOptions::default()).map(|s| sleepiest_guard(&s))
}

/// Score of the guard most often asleep on the same minute.
pub fn compute_most_frequent_sleeper_score<S: AsRef<str>>(lines: &[S]) -> Result<u64> {
    summarize_log(lines, &AnalysisOptions::default()).map(|s| most_frequent_sleeper(&s))
}

/// [`compute_sleepiest_guard_score`] over a log file or directory.
pub fn sleepiest_guard_score_from_file(path: &Path) -> Result<u64> {
    compute_sleepiest_guard_score(&load_log_input(path)?)
}

/// [`compute_most_frequent_sleeper_score`] over a log file or directory.
pub fn most_frequent_sleeper_score_from_file(path: &Path) -> Result<u64> {
    compute_most_frequent_sleeper_score(&load_log_input(path)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use guardlog_core::error::GuardLogError;
    use tempfile::TempDir;

    const EXAMPLE_LOG: &[&str] = &[
        "[1518-11-01 00:00] Guard #10 begins shift",
        "[1518-11-01 00:05] falls asleep",
        "[1518-11-01 00:25] wakes up",
        "[1518-11-01 00:30] falls asleep",
        "[1518-11-01 00:55] wakes up",
        "[1518-11-01 23:58] Guard #99 begins shift",
        "[1518-11-02 00:40] falls asleep",
        "[1518-11-02 00:50] wakes up",
        "[1518-11-03 00:05] Guard #10 begins shift",
        "[1518-11-03 00:24] falls asleep",
        "[1518-11-03 00:29] wakes up",
        "[1518-11-04 00:02] Guard #99 begins shift",
        "[1518-11-04 00:36] falls asleep",
        "[1518-11-04 00:46] wakes up",
        "[1518-11-05 00:03] Guard #99 begins shift",
        "[1518-11-05 00:45] falls asleep",
        "[1518-11-05 00:55] wakes up",
    ];

    fn shuffled_example() -> Vec<&'static str> {
        // Deterministic reordering: every third line first, then the rest reversed.
        let mut lines: Vec<&str> = EXAMPLE_LOG.iter().step_by(3).copied().collect();
        let rest: Vec<&str> = EXAMPLE_LOG
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 3 != 0)
            .map(|(_, l)| *l)
            .rev()
            .collect();
        lines.extend(rest);
        lines
    }

    // ── Entry points ──────────────────────────────────────────────────────────

    #[test]
    fn test_sleepiest_guard_example() {
        assert_eq!(compute_sleepiest_guard_score(EXAMPLE_LOG).unwrap(), 240);
    }

    #[test]
    fn test_most_frequent_sleeper_example() {
        assert_eq!(compute_most_frequent_sleeper_score(EXAMPLE_LOG).unwrap(), 4455);
    }

    #[test]
    fn test_scores_independent_of_input_order() {
        let lines = shuffled_example();
        assert_eq!(compute_sleepiest_guard_score(&lines).unwrap(), 240);
        assert_eq!(compute_most_frequent_sleeper_score(&lines).unwrap(), 4455);
    }

    #[test]
    fn test_empty_log_scores_zero() {
        let lines: Vec<String> = Vec::new();
        assert_eq!(compute_sleepiest_guard_score(&lines).unwrap(), 0);
        assert_eq!(compute_most_frequent_sleeper_score(&lines).unwrap(), 0);
    }

    #[test]
    fn test_parse_error_aborts_computation() {
        let lines = ["[1518-11-01 00:00] Guard #10 begins shift", "[bad] falls asleep"];
        assert!(compute_sleepiest_guard_score(&lines).unwrap_err().is_parse_error());
    }

    #[test]
    fn test_malformed_log_aborts_computation() {
        let lines = ["[1518-11-01 00:05] falls asleep", "[1518-11-01 00:25] wakes up"];
        let err = compute_most_frequent_sleeper_score(&lines).unwrap_err();
        assert!(matches!(err, GuardLogError::MalformedLog { .. }));
    }

    // ── analyze_log ───────────────────────────────────────────────────────────

    #[test]
    fn test_analyze_log_example() {
        let result = analyze_log(EXAMPLE_LOG, &AnalysisOptions::default()).unwrap();

        assert_eq!(result.sleepiest_guard_score, 240);
        assert_eq!(result.most_frequent_sleeper_score, 4455);
        assert_eq!(result.shifts.len(), 5);
        assert_eq!(result.summaries.len(), 2);

        let guard10 = &result.summaries[0];
        assert_eq!(guard10.guard_id, 10);
        assert_eq!(guard10.shifts, 2);
        assert_eq!(guard10.total_minutes_asleep, 50);
        assert_eq!(guard10.most_frequent_minute, 24);
        assert_eq!(guard10.most_frequent_minute_count, 2);

        let guard99 = &result.summaries[1];
        assert_eq!(guard99.guard_id, 99);
        assert_eq!(guard99.total_minutes_asleep, 30);
        assert_eq!(guard99.most_frequent_minute, 45);
        assert_eq!(guard99.most_frequent_minute_count, 3);

        assert_eq!(
            result.metadata,
            AnalysisMetadata {
                lines_read: 17,
                entries_sequenced: 17,
                duplicates_dropped: 0,
                shifts_reconstructed: 5,
                guards: 2,
            }
        );
    }

    #[test]
    fn test_analyze_log_duplicates_change_results_only_when_kept() {
        let mut lines: Vec<&str> = EXAMPLE_LOG.to_vec();
        // A duplicated shift start opens an extra, empty shift for guard 99.
        lines.push("[1518-11-05 00:03] Guard #99 begins shift");

        let kept = analyze_log(&lines, &AnalysisOptions::default()).unwrap();
        assert_eq!(kept.shifts.len(), 6);
        assert_eq!(kept.metadata.duplicates_dropped, 0);

        let deduped = analyze_log(
            &lines,
            &AnalysisOptions {
                dedupe_entries: true,
            },
        )
        .unwrap();
        assert_eq!(deduped.shifts.len(), 5);
        assert_eq!(deduped.metadata.duplicates_dropped, 1);
    }

    #[test]
    fn test_analyze_log_to_json() {
        let result = analyze_log(EXAMPLE_LOG, &AnalysisOptions::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(json["sleepiest_guard_score"], 240);
        assert_eq!(json["most_frequent_sleeper_score"], 4455);
        assert_eq!(json["summaries"].as_array().unwrap().len(), 2);
        assert_eq!(json["metadata"]["shifts_reconstructed"], 5);
    }

    // ── File entry points ─────────────────────────────────────────────────────

    #[test]
    fn test_scores_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guardDutiesExample.txt");
        std::fs::write(&path, EXAMPLE_LOG.join("\n")).unwrap();

        assert_eq!(sleepiest_guard_score_from_file(&path).unwrap(), 240);
        assert_eq!(most_frequent_sleeper_score_from_file(&path).unwrap(), 4455);
    }

    #[test]
    fn test_scores_from_directory_split_across_files() {
        let dir = TempDir::new().unwrap();
        let (first, second) = EXAMPLE_LOG.split_at(8);
        std::fs::write(dir.path().join("b.txt"), first.join("\n")).unwrap();
        std::fs::write(dir.path().join("a.txt"), second.join("\n")).unwrap();

        assert_eq!(sleepiest_guard_score_from_file(dir.path()).unwrap(), 240);
        assert_eq!(most_frequent_sleeper_score_from_file(dir.path()).unwrap(), 4455);
    }

    #[test]
    fn test_scores_from_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = sleepiest_guard_score_from_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, GuardLogError::FileRead { .. }));
    }
}
