use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a UTC instant as RFC 3339 with microseconds and a `+00:00` offset.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}
