//! Line classification for group chat exports.
//!
//! Every line of an export either starts with a `M/D/YY, H:MM AM` timestamp
//! or it does not; lines without one (continuation lines, blank lines) carry
//! no data and are skipped. Timestamped lines are further classified by an
//! ordered pattern table over the payload: system join/add/create events are
//! checked before the generic `name: text` message shape, so a payload that
//! could satisfy both is resolved by rule order.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};

/// Sentinel identifier used when the export says the owner was added.
pub const SELF_USER: &str = "You";

/// Timestamp prefix: `M/D/YY, H:MM AM|PM`. Hour and day may be one digit.
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2}), (\d{1,2}):(\d{2}) ([AP]M)").unwrap()
});

/// What a timestamped line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// `name: text` chat message.
    Message { sender: String },
    /// Phone number joined via the group's invite link.
    JoinedViaLink { user: String },
    /// Phone number added a named member.
    AddedByOther { user: String },
    /// The export owner was added ("added you").
    AddedSelf,
    /// Phone number created the group.
    GroupCreated { user: String },
    /// Timestamped line with no recognized payload shape.
    Unrecognized,
}

/// One classified export line. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEvent {
    pub timestamp: NaiveDateTime,
    pub kind: EventKind,
}

type Build = fn(&Captures) -> EventKind;

/// Ordered payload rules; the first matching rule wins.
///
/// Join/add/create shapes come before the message shape: "+1 555 added Bob"
/// must never read as a message, and "added you" beats `name: text` when a
/// payload satisfies both. The phone-number pattern (`+` then space-separated
/// digit groups) is treated as an opaque identifier, never parsed further.
static PAYLOAD_RULES: LazyLock<Vec<(Regex, Build)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(\+\d+(?: \d+)*) joined using this group's invite link").unwrap(),
            |c: &Captures| EventKind::JoinedViaLink {
                user: c[1].trim().to_string(),
            },
        ),
        (
            Regex::new(r"(\+\d+(?: \d+)*) added (.+)$").unwrap(),
            |c: &Captures| EventKind::AddedByOther {
                user: c[2].trim().to_string(),
            },
        ),
        (
            Regex::new(r"added you").unwrap(),
            |_: &Captures| EventKind::AddedSelf,
        ),
        (
            Regex::new(r"(\+\d+(?: \d+)*) created group").unwrap(),
            |c: &Captures| EventKind::GroupCreated {
                user: c[1].trim().to_string(),
            },
        ),
        (
            Regex::new(r"^([^:]+): ").unwrap(),
            |c: &Captures| EventKind::Message {
                sender: c[1].trim().to_string(),
            },
        ),
    ]
});

/// Extracts the leading timestamp and returns it with the remaining payload.
///
/// Returns None when the line does not start with the timestamp pattern or
/// the matched digits do not form a real date/time; such lines are inert.
pub fn extract_timestamp(line: &str) -> Option<(NaiveDateTime, &str)> {
    let caps = TIMESTAMP_RE.captures(line)?;

    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    let hour12: u32 = caps[4].parse().ok()?;
    let minute: u32 = caps[5].parse().ok()?;

    if !(1..=12).contains(&hour12) {
        return None;
    }
    let hour = match (&caps[6], hour12) {
        ("AM", 12) => 0,
        ("AM", h) => h,
        ("PM", 12) => 12,
        (_, h) => h + 12,
    };

    let timestamp = NaiveDate::from_ymd_opt(2000 + year, month, day)?.and_hms_opt(hour, minute, 0)?;

    // Exports separate timestamp and payload with " - ".
    let rest = &line[caps.get(0)?.end()..];
    let payload = rest.strip_prefix(" - ").unwrap_or(rest);

    Some((timestamp, payload))
}

/// Classifies a single raw export line.
///
/// Returns None for lines without a parseable timestamp; every timestamped
/// line yields an event, falling back to `EventKind::Unrecognized`.
pub fn classify(line: &str) -> Option<ClassifiedEvent> {
    let (timestamp, payload) = extract_timestamp(line)?;

    let kind = PAYLOAD_RULES
        .iter()
        .find_map(|(pattern, build)| pattern.captures(payload).map(|caps| build(&caps)))
        .unwrap_or(EventKind::Unrecognized);

    Some(ClassifiedEvent { timestamp, kind })
}
