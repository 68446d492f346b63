//! Decoding of the record-list payload.
//!
//! The scoring service answers with a JSON object holding the records in one
//! array field (`"user"` by default):
//!
//! ```json
//! { "user": [ { "email": "...", "module": "...", "score": 8,
//!               "percentage": 80, "createdAt": "2024-10-15T10:30:00Z" } ] }
//! ```

use serde_json::Value;

use scorecard_core::{FetchError, ScoreRecord};

/// Name of the array field used when none is configured.
pub const DEFAULT_FIELD: &str = "user";

/// Decode a raw response body.
pub fn decode_records(body: &[u8], field: &str) -> Result<Vec<ScoreRecord>, FetchError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::MalformedResponse(format!("response is not JSON: {e}")))?;
    records_from_value(value, field)
}

/// Pull the record array out of an already-parsed payload.
pub fn records_from_value(value: Value, field: &str) -> Result<Vec<ScoreRecord>, FetchError> {
    let Value::Object(mut object) = value else {
        return Err(FetchError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    };
    let list = object
        .remove(field)
        .ok_or_else(|| FetchError::MalformedResponse(format!("missing field `{field}`")))?;
    if !list.is_array() {
        return Err(FetchError::MalformedResponse(format!(
            "field `{field}` is not an array"
        )));
    }
    serde_json::from_value(list)
        .map_err(|e| FetchError::MalformedResponse(format!("invalid record in `{field}`: {e}")))
}
