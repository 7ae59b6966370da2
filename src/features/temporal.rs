//! Hour-of-day extraction from loosely formatted timestamps.
//!
//! Parse failures are tolerated, not fatal: the caller skips the hourly
//! bucket for that observation but still counts it toward the total.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

/// Zoned formats tried after RFC 3339 / RFC 2822; the last one is the
/// classic Twitter export format ("Tue Oct 31 22:10:47 +0000 2017").
const ZONED_FORMATS: &[&str] = &["%a %b %d %H:%M:%S %z %Y"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// UTC hour of day in `[0, 23]`, or `None` when the timestamp does not
/// parse under any accepted format.
pub fn hour_of(timestamp: &str) -> Option<u32> {
    let ts = timestamp.trim();
    if ts.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc).hour());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(ts) {
        return Some(dt.with_timezone(&Utc).hour());
    }
    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(ts, fmt) {
            return Some(dt.with_timezone(&Utc).hour());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Some(dt.hour());
        }
    }
    None
}
