/// Single-pass aggregation of classified events into per-day buckets.
///
/// The bucket map is built and owned here for the duration of one pass and
/// returned to the caller; nothing mutates it afterwards.
use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::classify::{self, EventKind, SELF_USER};
use crate::window::DayWindow;

/// Per-calendar-day aggregation record.
#[derive(Debug, Default, Clone)]
pub struct DayBucket {
    /// Unique identifiers of users who joined the group that day.
    pub joined: HashSet<String>,
    /// Unique identifiers of users who sent at least one message that day.
    pub senders: HashSet<String>,
    /// Messages sent per user that day.
    pub message_counts: HashMap<String, u32>,
}

/// Aggregates every line of the export into the resolved window's buckets.
///
/// A bucket exists for every window day, populated or not, and the map
/// iterates in window order. Lines without a timestamp, events outside the
/// window, and unrecognized payloads contribute nothing.
pub fn aggregate(text: &str, window: &DayWindow) -> IndexMap<NaiveDate, DayBucket> {
    let mut buckets: IndexMap<NaiveDate, DayBucket> = window
        .days()
        .map(|day| (day, DayBucket::default()))
        .collect();

    for line in text.lines() {
        let Some(event) = classify::classify(line) else {
            continue;
        };
        let Some(bucket) = buckets.get_mut(&event.timestamp.date()) else {
            continue;
        };

        match event.kind {
            EventKind::Message { sender } => {
                *bucket.message_counts.entry(sender.clone()).or_insert(0) += 1;
                bucket.senders.insert(sender);
            }
            EventKind::JoinedViaLink { user }
            | EventKind::AddedByOther { user }
            | EventKind::GroupCreated { user } => {
                bucket.joined.insert(user);
            }
            EventKind::AddedSelf => {
                bucket.joined.insert(SELF_USER.to_string());
            }
            EventKind::Unrecognized => {}
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn week_ending(y: i32, m: u32, d: u32) -> DayWindow {
        DayWindow::ending_at(day(y, m, d), 7)
    }

    #[test]
    fn test_every_window_day_gets_a_bucket() {
        let buckets = aggregate("", &week_ending(2024, 6, 2));
        assert_eq!(buckets.len(), 7);
        assert!(buckets.values().all(|b| b.senders.is_empty()));
        let days: Vec<_> = buckets.keys().copied().collect();
        assert_eq!(days[0], day(2024, 5, 27));
        assert_eq!(days[6], day(2024, 6, 2));
    }

    #[test]
    fn test_messages_fill_senders_and_counts() {
        let text = "6/1/24, 9:00 AM - Alice: hi\n\
                    6/1/24, 9:10 AM - Alice: again\n\
                    6/1/24, 9:20 AM - Bob: hello";
        let buckets = aggregate(text, &week_ending(2024, 6, 2));

        let bucket = &buckets[&day(2024, 6, 1)];
        assert_eq!(bucket.senders.len(), 2);
        assert_eq!(bucket.message_counts["Alice"], 2);
        assert_eq!(bucket.message_counts["Bob"], 1);
    }

    #[test]
    fn test_join_variants_fill_joined_set() {
        let text = "6/1/24, 9:00 AM - +1 555 010 joined using this group's invite link\n\
                    6/1/24, 9:05 AM - +1 555 000 added Bob\n\
                    6/1/24, 9:06 AM - Carol added you\n\
                    5/28/24, 8:00 AM - +1 555 000 created group \"Trip\"";
        let buckets = aggregate(text, &week_ending(2024, 6, 2));

        let june1 = &buckets[&day(2024, 6, 1)];
        assert_eq!(june1.joined.len(), 3);
        assert!(june1.joined.contains("+1 555 010"));
        assert!(june1.joined.contains("Bob"));
        assert!(june1.joined.contains("You"));

        let may28 = &buckets[&day(2024, 5, 28)];
        assert!(may28.joined.contains("+1 555 000"));
    }

    #[test]
    fn test_same_day_joins_deduplicate() {
        let text = "6/1/24, 9:00 AM - +1 555 000 added Bob\n\
                    6/1/24, 9:30 AM - +1 555 111 added Bob";
        let buckets = aggregate(text, &week_ending(2024, 6, 2));
        assert_eq!(buckets[&day(2024, 6, 1)].joined.len(), 1);
    }

    #[test]
    fn test_events_outside_window_are_dropped() {
        let text = "5/1/24, 9:00 AM - Alice: way before the window\n\
                    6/1/24, 9:00 AM - Alice: in the window";
        let buckets = aggregate(text, &week_ending(2024, 6, 2));
        let total_messages: u32 = buckets
            .values()
            .flat_map(|b| b.message_counts.values())
            .sum();
        assert_eq!(total_messages, 1);
    }

    #[test]
    fn test_unrecognized_and_unparseable_lines_have_no_effect() {
        let text = "6/1/24, 9:00 AM - security code changed\n\
                    continuation text without a timestamp\n\
                    6/1/24, 9:05 AM - Alice: hi";
        let buckets = aggregate(text, &week_ending(2024, 6, 2));
        let bucket = &buckets[&day(2024, 6, 1)];
        assert_eq!(bucket.senders.len(), 1);
        assert!(bucket.joined.is_empty());
    }
}
