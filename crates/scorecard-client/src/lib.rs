//! scorecard-client — Score sources and configuration.
//!
//! Implements the `ScoreSource` trait for the remote scoring service (one
//! POST returning a record list) and for local JSON snapshots, and loads the
//! `scorecard.toml` configuration that chooses between them.

pub mod config;
pub mod file;
pub mod http;
pub mod mock;
pub mod payload;

pub use config::{create_source, load_config, ScorecardConfig, SourceConfig};
pub use file::FileScoreSource;
pub use http::HttpScoreSource;
