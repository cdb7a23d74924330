/// Activity scoring over aggregated day buckets.
use std::collections::HashMap;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::aggregate::DayBucket;

/// Default number of distinct messaging days that qualifies a user as active.
pub const DEFAULT_ACTIVE_DAY_THRESHOLD: u32 = 4;

/// Selects users who messaged on at least `threshold` distinct window days.
///
/// Sending many messages on one day still counts as a single day. The result
/// carries no guaranteed order; presentation layers sort it.
pub fn score_activity(buckets: &IndexMap<NaiveDate, DayBucket>, threshold: u32) -> Vec<String> {
    let mut days_active: HashMap<&str, u32> = HashMap::new();
    for bucket in buckets.values() {
        for sender in &bucket.senders {
            *days_active.entry(sender).or_insert(0) += 1;
        }
    }

    days_active
        .into_iter()
        .filter(|(_, days)| *days >= threshold)
        .map(|(user, _)| user.to_string())
        .collect()
}
