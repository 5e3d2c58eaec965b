use serde_json::json;

use super::*;

#[test]
fn rfc3339_strings_are_normalized_to_utc() {
    assert_eq!(to_rfc3339(&json!("2024-03-01T12:00:00+02:00")).as_deref(), Some("2024-03-01T10:00:00Z"));
    assert_eq!(to_rfc3339(&json!("2024-03-01T10:00:00Z")).as_deref(), Some("2024-03-01T10:00:00Z"));
}

#[test]
fn bare_dates_become_midnight_utc() {
    assert_eq!(to_rfc3339(&json!("2020-10-01")).as_deref(), Some("2020-10-01T00:00:00Z"));
}

#[test]
fn epoch_millis_and_timestamp_objects_are_accepted() {
    assert_eq!(to_rfc3339(&json!(0)).as_deref(), Some("1970-01-01T00:00:00Z"));
    assert_eq!(to_rfc3339(&json!({ "seconds": 86_400, "nanoseconds": 0 })).as_deref(), Some("1970-01-02T00:00:00Z"));
    assert_eq!(to_rfc3339(&json!({ "_seconds": 60 })).as_deref(), Some("1970-01-01T00:01:00Z"));
}

#[test]
fn unreadable_values_are_none() {
    assert_eq!(to_rfc3339(&Value::Null), None);
    assert_eq!(to_rfc3339(&json!("next tuesday")), None);
    assert_eq!(to_rfc3339(&json!(true)), None);
    assert_eq!(to_rfc3339(&json!({ "when": 1 })), None);
}

#[test]
fn now_is_rfc3339() {
    let now = now_rfc3339();
    assert!(OffsetDateTime::parse(&now, &Rfc3339).is_ok(), "{now}");
}
