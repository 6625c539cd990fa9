//! Lenient timestamp parsing for meeting and vote dates.
//!
//! Upstream extraction is heuristic, so unparsable dates are never an error:
//! they come back as `None` and callers order those steps first.
//!
//! Timestamps keep the offset they were written with: ordering and durations
//! compare instants, calendar dates are read in the source offset.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// A parsed fact-store date with its source UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// A date format accepted for fact-store timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// RFC 3339 (`"2024-03-15T10:00:00+01:00"`), offset preserved.
    Rfc3339,
    /// A chrono `strftime` pattern for a plain calendar date, read as midnight UTC.
    Date(&'static str),
}

/// Formats tried in order by [`parse_timestamp`].
pub const ACCEPTED_FORMATS: &[TimestampFormat] =
    &[TimestampFormat::Rfc3339, TimestampFormat::Date("%Y-%m-%d")];

impl TimestampFormat {
    fn parse(self, raw: &str) -> Option<Timestamp> {
        match self {
            Self::Rfc3339 => DateTime::parse_from_rfc3339(raw).ok(),
            Self::Date(pattern) => NaiveDate::parse_from_str(raw, pattern)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc().fixed_offset()),
        }
    }
}

/// Parse a raw timestamp using the first matching format in [`ACCEPTED_FORMATS`].
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    ACCEPTED_FORMATS.iter().find_map(|format| format.parse(raw))
}

/// Calendar date of an optional timestamp in its own offset, as used by step
/// de-duplication and date labels.
#[must_use]
pub fn calendar_date(timestamp: Option<Timestamp>) -> Option<NaiveDate> {
    timestamp.map(|ts| ts.date_naive())
}
