use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Find the sleepiest guards in a guard shift log
#[derive(Parser, Debug, Clone)]
#[command(
    name = "guard-log",
    about = "Find the sleepiest guards in a guard shift log",
    version
)]
pub struct Settings {
    /// Log file, or a directory searched recursively for *.txt logs
    pub input: PathBuf,

    /// Which answer to print
    #[arg(long, default_value = "both", value_parser = ["sleepiest", "frequent", "both"])]
    pub query: String,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Drop exact duplicate lines (same timestamp and action) before analysis
    #[arg(long, env = "GUARD_LOG_DEDUPE_ENTRIES")]
    pub dedupe_entries: bool,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── AnalysisOptions ────────────────────────────────────────────────────────────

/// Library-level knobs for one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// When `true`, entries with identical timestamp and action are collapsed
    /// into one before shifts are rebuilt. Defaults to `false`, which keeps
    /// every line.
    #[serde(default)]
    pub dedupe_entries: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments from the process environment and apply `--debug`.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but with an explicit argument list, for
    /// unit tests.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    /// Options passed down to the analysis pipeline.
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            dedupe_entries: self.dedupe_entries,
        }
    }

    /// `--log-level` mapped onto a `tracing` filter directive.
    pub fn tracing_level(&self) -> &'static str {
        match self.log_level.to_uppercase().as_str() {
            "DEBUG" => "debug",
            "INFO" => "info",
            "ERROR" => "error",
            _ => "warn",
        }
    }

    /// `--debug` overrides log level.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
