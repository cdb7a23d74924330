use chrono::NaiveDate;

/// Human-readable day label for the summary, e.g. "Jun 3".
pub fn day_label(day: NaiveDate) -> String {
    day.format("%b %-d").to_string()
}

/// Compact day key matching the export's date encoding, e.g. "6/3/24".
#[allow(dead_code)]
pub fn day_key(day: NaiveDate) -> String {
    day.format("%-m/%-d/%y").to_string()
}
