//! Score record data model.
//!
//! A `ScoreRecord` is one user's result for one assessed module, as returned
//! by the scoring service.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One user's assessment result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// User identifier. Not unique: one user may have several module scores.
    #[serde(default)]
    pub email: Option<String>,
    /// Name of the assessed module.
    #[serde(default)]
    pub module: Option<String>,
    /// Raw score.
    pub score: f64,
    /// Percentage computed upstream.
    pub percentage: f64,
    /// When the record was produced.
    #[serde(rename = "createdAt", deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn new(
        email: impl Into<String>,
        module: impl Into<String>,
        score: f64,
        percentage: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            module: Some(module.into()),
            score,
            percentage,
            created_at,
        }
    }

    /// The creation time as an RFC 1123 UTC string,
    /// e.g. `Tue, 15 Oct 2024 10:30:00 GMT`.
    pub fn created_at_utc_string(&self) -> String {
        self.created_at
            .format("%a, %d %b %Y %H:%M:%S GMT")
            .to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
}

/// Accepts RFC 3339 strings, naive date-times and dates (read as UTC), or
/// epoch milliseconds.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
        RawTimestamp::FractionalMillis(ms) => Utc
            .timestamp_millis_opt(ms.trunc() as i64)
            .single()
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
        RawTimestamp::Text(s) => parse_timestamp(&s)
            .ok_or_else(|| D::Error::custom(format!("invalid createdAt timestamp: '{s}'"))),
    }
}

/// Parse a textual timestamp the way the scoring service emits them.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
