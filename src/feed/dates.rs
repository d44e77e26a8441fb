//! Publish date normalization
//!
//! Harvested dates are free text in a handful of site-specific shapes.
//! Normalization tries known patterns in order and hands back `None` for
//! anything unparseable; the assembler owns the substitute-current-time
//! fallback so the policy stays visible and testable.

use crate::records::UNKNOWN;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Textual date patterns tried in order, first full match wins
const DATE_PATTERNS: [&str; 3] = [
    "%b. %d, %Y", // Nov. 22, 2016
    "%B %d, %Y",  // November 22, 2016
    "%b %d, %Y",  // Nov 22, 2016
];

/// RFC 2822 style timestamp used in RSS pubDate elements
const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S +0000";

/// Parses a raw harvested date string into midnight UTC of that day
///
/// Returns `None` for the empty string, the "Unknown" sentinel, and
/// anything matching no known pattern.
pub fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == UNKNOWN {
        return None;
    }

    for pattern in DATE_PATTERNS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, pattern) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&midnight));
        }
    }

    None
}

/// Formats a timestamp for an RSS pubDate element
pub fn format_pub_date(datetime: &DateTime<Utc>) -> String {
    datetime.format(PUB_DATE_FORMAT).to_string()
}
