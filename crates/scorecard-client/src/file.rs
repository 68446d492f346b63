//! Local JSON snapshot source.
//!
//! Reads a file holding the same payload the scoring service returns. Handy
//! for offline use and demos.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::instrument;

use scorecard_core::{FetchError, ScoreRecord, ScoreSource};

use crate::payload::{decode_records, DEFAULT_FIELD};

pub struct FileScoreSource {
    path: PathBuf,
    field: String,
}

impl FileScoreSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            field: DEFAULT_FIELD.to_string(),
        }
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.field = field.to_string();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ScoreSource for FileScoreSource {
    fn name(&self) -> &str {
        "file"
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<Vec<ScoreRecord>, FetchError> {
        let body = tokio::fs::read(&self.path).await.map_err(|e| {
            FetchError::Network(format!("failed to read {}: {e}", self.path.display()))
        })?;
        decode_records(&body, &self.field)
    }
}
