//! Remote scoring service source.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use scorecard_core::{FetchError, ScoreRecord, ScoreSource};

use crate::payload::{decode_records, DEFAULT_FIELD};

pub const DEFAULT_ENDPOINT: &str = "https://coca-cola-backend.onrender.com/api/getUserScore";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches the record list with one bodyless POST to a fixed endpoint.
pub struct HttpScoreSource {
    endpoint: String,
    field: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpScoreSource {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = if endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            endpoint
        };

        let client = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            field: DEFAULT_FIELD.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            client,
        })
    }

    /// Read records from `field` instead of `"user"`.
    pub fn with_field(mut self, field: &str) -> Self {
        self.field = field.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout_secs)
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl ScoreSource for HttpScoreSource {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> Result<Vec<ScoreRecord>, FetchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        let records = decode_records(&body, &self.field)?;
        debug!(count = records.len(), bytes = body.len(), "decoded response");
        Ok(records)
    }
}
