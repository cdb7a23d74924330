/// Date window resolution for the trailing-activity summary.
///
/// The window is anchored on the newest timestamp found anywhere in the
/// export: a single pass tracks the maximum timestamp, and the window is the
/// run of consecutive calendar days ending on that day (7 by default).
use chrono::{Duration, NaiveDate};

use crate::classify::extract_timestamp;
use crate::error::{AnalyzeError, Result};

/// An inclusive range of consecutive calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWindow {
    /// First day (inclusive).
    pub from: NaiveDate,
    /// Last day (inclusive); the calendar day of the newest timestamp.
    pub to: NaiveDate,
}

impl DayWindow {
    /// Window of `days` consecutive days ending at `last` inclusive.
    pub fn ending_at(last: NaiveDate, days: u32) -> Self {
        let days = days.max(1);
        DayWindow {
            from: last - Duration::days(i64::from(days) - 1),
            to: last,
        }
    }

    /// Inclusive boundary test at calendar-day precision.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }

    /// Number of days in the window.
    pub fn len(&self) -> usize {
        (self.to - self.from).num_days() as usize + 1
    }

    /// A window always holds at least one day.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Days in order, oldest to newest.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.from.iter_days().take(self.len())
    }
}

/// Resolves the trailing window from raw export lines.
///
/// Only the timestamp prefix of each line matters here; payloads are ignored.
/// The maximum timestamp is tracked with a strict `>` comparison (ties keep
/// the first seen, which is irrelevant once truncated to a day). Fails with
/// `NoTimestampFound` when no line carries a parseable timestamp.
pub fn resolve_window<'a, I>(lines: I, days: u32) -> Result<DayWindow>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut latest = None;
    for line in lines {
        if let Some((timestamp, _)) = extract_timestamp(line) {
            if latest.map_or(true, |seen| timestamp > seen) {
                latest = Some(timestamp);
            }
        }
    }

    let latest = latest.ok_or(AnalyzeError::NoTimestampFound)?;
    Ok(DayWindow::ending_at(latest.date(), days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ending_at_spans_seven_days() {
        let window = DayWindow::ending_at(day(2024, 6, 2), 7);
        assert_eq!(window.from, day(2024, 5, 27));
        assert_eq!(window.to, day(2024, 6, 2));
        assert_eq!(window.len(), 7);
    }

    #[test]
    fn test_ending_at_crosses_month_boundary() {
        let window = DayWindow::ending_at(day(2024, 3, 2), 7);
        assert_eq!(window.from, day(2024, 2, 25));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let window = DayWindow::ending_at(day(2024, 6, 2), 7);
        assert!(window.contains(day(2024, 5, 27)));
        assert!(window.contains(day(2024, 6, 2)));
        assert!(!window.contains(day(2024, 5, 26)));
        assert!(!window.contains(day(2024, 6, 3)));
    }

    #[test]
    fn test_days_are_ordered_oldest_first() {
        let window = DayWindow::ending_at(day(2024, 6, 2), 3);
        let days: Vec<_> = window.days().collect();
        assert_eq!(
            days,
            vec![day(2024, 5, 31), day(2024, 6, 1), day(2024, 6, 2)]
        );
    }

    #[test]
    fn test_resolve_window_uses_latest_timestamp() {
        let lines = [
            "6/1/24, 9:00 AM - Alice: hi",
            "6/2/24, 10:00 AM - Alice: hello again",
            "5/30/24, 8:00 AM - Bob: early",
        ];
        let window = resolve_window(lines, 7).unwrap();
        assert_eq!(window.to, day(2024, 6, 2));
        assert_eq!(window.from, day(2024, 5, 27));
    }

    #[test]
    fn test_resolve_window_ignores_unparseable_lines() {
        let lines = [
            "random continuation line",
            "6/1/24, 9:00 AM - Alice: hi",
            "",
        ];
        let window = resolve_window(lines, 7).unwrap();
        assert_eq!(window.to, day(2024, 6, 1));
    }

    #[test]
    fn test_resolve_window_no_timestamps() {
        let lines = ["not a chat line", "also not one"];
        let err = resolve_window(lines, 7).unwrap_err();
        assert!(matches!(err, AnalyzeError::NoTimestampFound));
    }

    #[test]
    fn test_resolve_window_empty_input() {
        let err = resolve_window(std::iter::empty::<&str>(), 7).unwrap_err();
        assert!(matches!(err, AnalyzeError::NoTimestampFound));
    }

    #[test]
    fn test_resolve_window_custom_length() {
        let lines = ["6/10/24, 9:00 AM - Alice: hi"];
        let window = resolve_window(lines, 14).unwrap();
        assert_eq!(window.len(), 14);
        assert_eq!(window.from, day(2024, 5, 28));
    }
}
