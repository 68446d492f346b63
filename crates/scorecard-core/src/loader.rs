//! The one-shot initial load.
//!
//! `Loader::spawn` runs a single `fetch` on the tokio runtime and hands back a
//! `LoadHandle`. Dropping the handle detaches the task; its result is then
//! discarded.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{instrument, warn};

use crate::error::FetchError;
use crate::model::ScoreRecord;
use crate::traits::ScoreSource;

/// Outcome of the initial load.
pub type LoadResult = Result<Vec<ScoreRecord>, FetchError>;

/// Fetch the record list from `source` once, logging the outcome.
#[instrument(skip_all, fields(source = %source.name()))]
pub async fn load(source: &dyn ScoreSource) -> LoadResult {
    match source.fetch().await {
        Ok(records) => {
            tracing::info!(count = records.len(), "score records loaded");
            Ok(records)
        }
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "failed to load score records");
            Err(e)
        }
    }
}

/// Starts the initial load.
pub struct Loader;

impl Loader {
    /// Spawn exactly one fetch against `source`. Must be called inside a
    /// tokio runtime.
    pub fn spawn(source: Arc<dyn ScoreSource>) -> LoadHandle {
        let task = tokio::spawn(async move { load(source.as_ref()).await });
        LoadHandle { task }
    }
}

/// A pending initial load.
pub struct LoadHandle {
    task: JoinHandle<LoadResult>,
}

impl LoadHandle {
    /// Wait for the load to finish.
    pub async fn wait(self) -> LoadResult {
        match self.task.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(FetchError::Cancelled),
            Err(e) => Err(FetchError::Network(format!("load task failed: {e}"))),
        }
    }

    /// Cancel the load. A later `wait` yields `FetchError::Cancelled`.
    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
