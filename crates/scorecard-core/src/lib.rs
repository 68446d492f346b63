//! scorecard-core — Score records, filtering, pagination and view state.
//!
//! This crate defines the record model, the `ScoreSource` trait, and the
//! `Scorecard` controller that owns the state of one mounted score view:
//! the loaded collection, the search inputs, the filtered view and the
//! current page.

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod paginate;
pub mod state;
pub mod traits;

pub use error::FetchError;
pub use filter::{filter_records, ScoreQuery};
pub use loader::{LoadHandle, LoadResult, Loader};
pub use model::ScoreRecord;
pub use paginate::{Paginator, DEFAULT_PAGE_SIZE};
pub use state::{PageRow, PageView, Phase, Scorecard, View};
pub use traits::ScoreSource;
