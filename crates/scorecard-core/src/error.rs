//! Fetch error types.
//!
//! Defined in `scorecard-core` so the controller can hold the failure that
//! ended a load, and sources in other crates can produce it without string
//! matching.

use thiserror::Error;

/// Errors that can occur while loading score records from a source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, refused connection, I/O).
    #[error("network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The endpoint answered with a non-success status.
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response did not have the expected record-list shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The load was aborted before it completed.
    #[error("load cancelled")]
    Cancelled,
}

impl FetchError {
    /// The message shown in place of the table when loading fails.
    pub const USER_MESSAGE: &'static str = "Failed to fetch data";

    /// User-facing message for this failure.
    ///
    /// Every variant renders the same text; the variant itself is kept for
    /// logging and for callers that want to tell failures apart.
    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }

    /// Short machine-friendly name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Timeout(_) => "timeout",
            FetchError::Status { .. } => "status",
            FetchError::MalformedResponse(_) => "malformed_response",
            FetchError::Cancelled => "cancelled",
        }
    }
}
