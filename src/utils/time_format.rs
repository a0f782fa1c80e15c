use chrono::{DateTime, Utc};

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display form for store timestamps; the store itself keeps RFC 3339
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(FORMAT).to_string()
}
