use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Offset-bearing layouts RFC 3339 rejects: minute precision, or `+HHMM`.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];
/// Naive date-time layouts, interpreted as UTC. A trailing `Z` is stripped first.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a date-like string into a UTC instant.
///
/// Accepts RFC 3339 (`2017-01-17T12:51:49.637937Z`, `...+02:00`),
/// `YYYY-MM-DDTHH:MM[:SS[.fff]]` with an optional `Z`, `+HH:MM` or `+HHMM`
/// designator, and a bare `YYYY-MM-DD` (midnight). Forms without a zone
/// are read as UTC so the result never depends on the host's locale or
/// time zone.
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    let naive_text = s.strip_suffix(['Z', 'z']).unwrap_or(s);
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(naive_text, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whether `s` parses to a representable instant.
pub fn is_valid_date_string(s: &str) -> bool {
    parse_instant(s).is_some()
}

/// Compare two date strings by instant rather than by text.
///
/// `None` when either side does not parse.
pub fn compare(a: &str, b: &str) -> Option<Ordering> {
    compare_to_instant(a, &parse_instant(b)?)
}

/// Compare a date string against an already parsed instant.
///
/// Lets repeated comparisons against one target parse it only once.
pub fn compare_to_instant(a: &str, b: &DateTime<Utc>) -> Option<Ordering> {
    Some(parse_instant(a)?.cmp(b))
}
