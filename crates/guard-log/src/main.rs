mod bootstrap;

use anyhow::Result;
use guardlog_core::formatting::{format_answers, format_summary_table};
use guardlog_core::settings::Settings;
use guardlog_data::analysis::{analyze_log, AnalysisResult};
use guardlog_data::reader::load_log_input;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(settings.tracing_level(), settings.log_file.as_ref())?;

    tracing::info!("guard-log v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, Query: {}, Format: {}, Dedupe: {}",
        settings.input.display(),
        settings.query,
        settings.format,
        settings.dedupe_entries
    );

    let lines = load_log_input(&settings.input)?;
    let result = analyze_log(&lines, &settings.analysis_options())?;

    print!("{}", render(&settings, &result)?);
    Ok(())
}

/// Render `result` the way `--format` and `--query` ask for.
fn render(settings: &Settings, result: &AnalysisResult) -> Result<String> {
    if settings.format == "json" {
        let mut json = result.to_json()?;
        json.push('\n');
        return Ok(json);
    }

    let (sleepiest, frequent) = match settings.query.as_str() {
        "sleepiest" => (Some(result.sleepiest_guard_score), None),
        "frequent" => (None, Some(result.most_frequent_sleeper_score)),
        _ => (
            Some(result.sleepiest_guard_score),
            Some(result.most_frequent_sleeper_score),
        ),
    };

    let mut out = format_summary_table(&result.summaries);
    out.push('\n');
    out.push_str(&format_answers(sleepiest, frequent));
    Ok(out)
}
