//! The seam between the controller and wherever score records come from.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::ScoreRecord;

/// A place score records can be fetched from.
///
/// Implemented by the HTTP and file sources in `scorecard-client`, and by
/// test doubles.
#[async_trait]
pub trait ScoreSource: Send + Sync {
    /// Human-readable source name (e.g. "http").
    fn name(&self) -> &str;

    /// Fetch the full record list. Called once per mounted view.
    async fn fetch(&self) -> Result<Vec<ScoreRecord>, FetchError>;
}
