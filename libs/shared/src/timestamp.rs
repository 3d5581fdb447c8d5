//! ISO-8601 timestamps in the `YYYY-MM-DDTHH:MM:SS.sssZ` shape.
//!
//! Use as `#[serde(with = "shared::timestamp")]` on a `DateTime<Utc>` field.
//! Input must already be in that exact shape (UTC `Z`, three fractional
//! digits), so a decoded value always re-encodes to the same string.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Current time truncated to millisecond precision.
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    let millis = now.nanosecond() / 1_000_000 * 1_000_000;
    now.with_nanosecond(millis).unwrap_or(now)
}

pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
    if !raw.ends_with('Z') {
        return Err(format!("timestamp '{raw}' must be UTC with a 'Z' suffix"));
    }
    let ts = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid timestamp '{raw}': {e}"))?;
    if format(&ts) != raw {
        return Err(format!(
            "timestamp '{raw}' must have exactly millisecond precision"
        ));
    }
    Ok(ts)
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(de::Error::custom)
}
