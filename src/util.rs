use chrono::{DateTime, Local, Utc};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a server timestamp in the operator's local time zone.
pub fn format_local_time(ts: Option<&DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.with_timezone(&Local).format(TIME_FORMAT).to_string(),
        None => "unknown".to_string(),
    }
}
