/// Pipeline entry points: chat export text in, Summary out.
///
/// The pipeline runs in two explicit passes over the text: the first resolves
/// the trailing day window from the newest timestamp, the second aggregates
/// events against the now-known window.
use std::path::Path;

use crate::activity::{self, DEFAULT_ACTIVE_DAY_THRESHOLD};
use crate::aggregate;
use crate::error::Result;
use crate::stats::Summary;
use crate::stats_builder;
use crate::window;

/// Default trailing window length in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Tunable pipeline parameters with the documented defaults (7 days, 4 of 7).
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeConfig {
    pub window_days: u32,
    pub active_day_threshold: u32,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        AnalyzeConfig {
            window_days: DEFAULT_WINDOW_DAYS,
            active_day_threshold: DEFAULT_ACTIVE_DAY_THRESHOLD,
        }
    }
}

/// Runs the full pipeline over already-decoded export text.
///
/// Fails only with `NoTimestampFound`; every other malformed line is skipped
/// silently. Running twice on the same text yields the same summary.
pub fn analyze_chat(text: &str, config: &AnalyzeConfig) -> Result<Summary> {
    let window = window::resolve_window(text.lines(), config.window_days)?;
    tracing::debug!(from = %window.from, to = %window.to, "resolved day window");

    let buckets = aggregate::aggregate(text, &window);
    let active_users = activity::score_activity(&buckets, config.active_day_threshold);
    tracing::info!(
        days = buckets.len(),
        active_users = active_users.len(),
        "aggregation complete"
    );

    Ok(stats_builder::build_summary(
        &window,
        &buckets,
        active_users,
        config,
    ))
}

/// Reads a `.txt` export from disk and analyzes it.
///
/// A failed read surfaces as `UnreadableInput`; the content is never parsed
/// in that case.
pub fn analyze_file(path: &Path, config: &AnalyzeConfig) -> Result<Summary> {
    let text = std::fs::read_to_string(path)?;
    analyze_chat(&text, config)
}
