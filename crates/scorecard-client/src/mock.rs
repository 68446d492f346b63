//! Mock source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use scorecard_core::{FetchError, LoadResult, ScoreRecord, ScoreSource};

/// An in-memory `ScoreSource` that returns a fixed outcome and counts calls.
pub struct MockSource {
    outcome: LoadResult,
    call_count: AtomicU32,
}

impl MockSource {
    /// A source that always succeeds with `records`.
    pub fn with_records(records: Vec<ScoreRecord>) -> Self {
        Self {
            outcome: Ok(records),
            call_count: AtomicU32::new(0),
        }
    }

    /// A source that always fails with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
            call_count: AtomicU32::new(0),
        }
    }

    /// Number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ScoreSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<Vec<ScoreRecord>, FetchError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.outcome.clone()
    }
}
