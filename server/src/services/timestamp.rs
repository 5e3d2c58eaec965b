//! Timestamp normalization for stored documents.
//!
//! Stored dates arrive in several shapes: RFC 3339 strings, bare
//! `YYYY-MM-DD` dates, epoch milliseconds, or exported timestamp objects
//! (`{"seconds": .., "nanoseconds": ..}`, optionally underscore-prefixed).
//! Everything leaves the API as RFC 3339 in UTC.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

fn format(at: OffsetDateTime) -> Option<String> {
    at.to_offset(UtcOffset::UTC).format(&Rfc3339).ok()
}

/// RFC 3339 rendering of a stored timestamp, or `None` when it is absent
/// or unreadable.
pub fn to_rfc3339(value: &Value) -> Option<String> {
    match value {
        Value::String(raw) => {
            let raw = raw.trim();
            if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
                return format(at);
            }
            let date = Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()?;
            format(date.midnight().assume_utc())
        }
        Value::Number(n) => {
            let millis = n.as_i64()?;
            format(OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()?)
        }
        Value::Object(map) => {
            let seconds = map.get("seconds").or_else(|| map.get("_seconds"))?.as_i64()?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_i64)
                .unwrap_or(0);
            let total = i128::from(seconds) * 1_000_000_000 + i128::from(nanos);
            format(OffsetDateTime::from_unix_timestamp_nanos(total).ok()?)
        }
        _ => None,
    }
}

#[must_use]
pub fn now_rfc3339() -> String {
    format(OffsetDateTime::now_utc()).unwrap_or_default()
}
