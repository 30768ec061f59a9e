//! Log loading and chronological sequencing.
//!
//! Reads raw guard-log lines from disk and turns an unordered batch of lines
//! into a fully ordered sequence of [`LogEntry`] values.

use std::path::{Path, PathBuf};

use guardlog_core::error::{GuardLogError, Result};
use guardlog_core::models::LogEntry;
use guardlog_core::parser::parse_log_entry;
use guardlog_core::settings::AnalysisOptions;
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.txt` files recursively under `dir`, sorted by path.
pub fn find_log_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        warn!("Log path does not exist: {}", dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "txt")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Read one log file into lines.
///
/// Blank lines are skipped and a trailing `\r` is removed so CRLF files
/// parse like LF files. Content is otherwise untouched.
pub fn load_log_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| GuardLogError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Read every `.txt` log under `dir` and concatenate their lines.
///
/// File order does not matter to the analysis since lines are re-sequenced
/// afterwards, but files are visited in path order for reproducible logs.
pub fn load_log_directory(dir: &Path) -> Result<Vec<String>> {
    let files = find_log_files(dir);
    if files.is_empty() {
        return Err(GuardLogError::NoLogFiles(dir.to_path_buf()));
    }

    let mut all_lines = Vec::new();
    for file in &files {
        all_lines.extend(load_log_lines(file)?);
    }

    debug!(
        "Read {} lines from {} files under {}",
        all_lines.len(),
        files.len(),
        dir.display()
    );
    Ok(all_lines)
}

/// Load lines from `path`, which may be a single file or a directory.
pub fn load_log_input(path: &Path) -> Result<Vec<String>> {
    if path.is_dir() {
        load_log_directory(path)
    } else {
        load_log_lines(path)
    }
}

/// Parse every line and order the result by timestamp, then by action text.
///
/// With `options.dedupe_entries` set, exact duplicates (same timestamp and
/// action) collapse into one entry; otherwise every line survives. Any line
/// that fails to parse aborts the whole batch.
pub fn sequence_entries<S: AsRef<str>>(
    lines: &[S],
    options: &AnalysisOptions,
) -> Result<Vec<LogEntry>> {
    let mut entries = lines
        .iter()
        .map(|line| parse_log_entry(line.as_ref()))
        .collect::<Result<Vec<LogEntry>>>()?;

    sort_entries(&mut entries);

    if options.dedupe_entries {
        let before = entries.len();
        // Sorting makes duplicates adjacent.
        entries.dedup();
        let dropped = before - entries.len();
        if dropped > 0 {
            debug!("Dropped {} duplicate entries", dropped);
        }
    }

    debug!("Sequenced {} entries", entries.len());
    Ok(entries)
}

/// Sort in place by ascending timestamp, ties broken by ascending action text.
pub fn sort_entries(entries: &mut [LogEntry]) {
    entries.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.action.cmp(&b.action))
    });
}

// ── Tests ─────────────────────────────────────────────────────────────────────
