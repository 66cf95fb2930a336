use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A configuration record as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigEntry {
    /// Unique key (ex: `neuro/threads.model`)
    pub key: String,
    /// Arbitrary JSON payload
    #[serde(default)]
    pub value: Value,
    /// Free text explanation, may be absent
    #[serde(default)]
    pub description: Option<String>,
    /// Last successful write, set by the server
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ConfigEntry {
    /// Value as 2-space indented JSON, the text an operator edits.
    pub fn value_text(&self) -> String {
        pretty_value(&self.value)
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Body of `POST /api/configs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WriteRequest {
    pub key: String,
    pub value: Value,
    pub description: String,
}

/// Whatever the server answered to a cache invalidation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Acknowledgement(pub Value);

pub fn pretty_value(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Single-line preview of a value, cut to `max` characters.
pub fn value_preview(value: &Value, max: usize) -> String {
    let compact = value.to_string();
    if compact.chars().count() <= max {
        return compact;
    }
    let mut out: String = compact.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Parse a server timestamp.
///
/// Accepts RFC 3339 and naive ISO 8601 (`2024-05-01T10:00:00.123456`), the
/// latter being UTC as written by the backend.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => parse_timestamp(&s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_entry_with_naive_timestamp() {
        let entry: ConfigEntry = serde_json::from_value(json!({
            "key": "neuro/threads.model",
            "value": "anthropic/claude-3.5-sonnet",
            "description": null,
            "updated_at": "2024-05-01T10:00:00.123456"
        }))
        .unwrap();

        assert_eq!(entry.description_text(), "");
        let ts = entry.updated_at.unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-05-01T10:00:00.123456+00:00");
    }

    #[test]
    fn rfc3339_offsets_are_normalized_to_utc() {
        let ts = parse_timestamp("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[test]
    fn bad_or_missing_timestamp_does_not_fail_the_entry() {
        let entry: ConfigEntry = serde_json::from_value(json!({
            "key": "a",
            "value": 1,
            "updated_at": "yesterday"
        }))
        .unwrap();
        assert!(entry.updated_at.is_none());

        let entry: ConfigEntry = serde_json::from_value(json!({ "key": "b" })).unwrap();
        assert_eq!(entry.value, Value::Null);
        assert!(entry.updated_at.is_none());
    }

    #[test]
    fn value_text_uses_two_space_indent() {
        let entry = ConfigEntry {
            key: "k".into(),
            value: json!({ "a": [1, 2] }),
            description: None,
            updated_at: None,
        };
        assert_eq!(entry.value_text(), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn preview_truncates_long_values() {
        assert_eq!(value_preview(&json!("abc"), 10), "\"abc\"");
        assert_eq!(value_preview(&json!("abcdefghij"), 6), "\"abcd…");
    }
}
