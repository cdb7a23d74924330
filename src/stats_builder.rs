/// Shapes aggregated day buckets into the Summary output contract.
///
/// Pure assembly: every field is a function of the window, the buckets, and
/// the scored active-user list. No I/O beyond the generation date stamp.
use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::aggregate::DayBucket;
use crate::analyze::AnalyzeConfig;
use crate::stats::{Coverage, Series, Summary};
use crate::timefmt;
use crate::window::DayWindow;

pub const SCHEMA_VERSION: i32 = 1;

/// Builds the Summary from one completed aggregation pass.
///
/// Labels and both series follow window order, oldest to newest. The active
/// user list is sorted here for stable presentation; the scorer itself
/// guarantees no order.
pub fn build_summary(
    window: &DayWindow,
    buckets: &IndexMap<NaiveDate, DayBucket>,
    mut active_users: Vec<String>,
    config: &AnalyzeConfig,
) -> Summary {
    let mut labels = Vec::with_capacity(buckets.len());
    let mut messaging_users = Vec::with_capacity(buckets.len());
    let mut new_users = Vec::with_capacity(buckets.len());

    for (day, bucket) in buckets {
        labels.push(timefmt::day_label(*day));
        messaging_users.push(bucket.senders.len() as u32);
        new_users.push(bucket.joined.len() as u32);
    }

    active_users.sort();

    Summary {
        schema_version: SCHEMA_VERSION,
        generated_at: chrono::Local::now().format("%Y-%m-%d").to_string(),
        coverage: Coverage {
            from: window.from.format("%Y-%m-%d").to_string(),
            to: window.to.format("%Y-%m-%d").to_string(),
        },
        window_days: config.window_days,
        active_day_threshold: config.active_day_threshold,
        labels,
        series: Series {
            messaging_users,
            new_users,
        },
        active_users,
    }
}
