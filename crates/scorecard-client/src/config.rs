//! Source configuration and factory.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use scorecard_core::{ScoreSource, DEFAULT_PAGE_SIZE};

use crate::file::FileScoreSource;
use crate::http::{HttpScoreSource, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::payload::DEFAULT_FIELD;

/// Where score records are loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Http {
        #[serde(default = "default_endpoint")]
        endpoint: String,
        #[serde(default = "default_field")]
        field: String,
        #[serde(default = "default_timeout")]
        timeout_secs: u64,
    },
    File {
        path: PathBuf,
        #[serde(default = "default_field")]
        field: String,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Http {
            endpoint: default_endpoint(),
            field: default_field(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_field() -> String {
    DEFAULT_FIELD.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Top-level scorecard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardConfig {
    /// Records per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Record source.
    #[serde(default)]
    pub source: SourceConfig,
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            source: SourceConfig::default(),
        }
    }
}

impl ScorecardConfig {
    /// The configured page size, rejecting zero.
    pub fn page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.page_size).context("page_size must be at least 1")
    }

    /// Point the config at an HTTP endpoint, keeping the configured field.
    pub fn set_endpoint(&mut self, endpoint: String) {
        if let SourceConfig::Http { endpoint: e, .. } = &mut self.source {
            *e = endpoint;
            return;
        }
        let field = self.field().to_string();
        self.source = SourceConfig::Http {
            endpoint,
            field,
            timeout_secs: default_timeout(),
        };
    }

    /// Read from a local snapshot, keeping the configured field.
    pub fn set_input(&mut self, path: PathBuf) {
        let field = self.field().to_string();
        self.source = SourceConfig::File { path, field };
    }

    pub fn set_field(&mut self, name: String) {
        match &mut self.source {
            SourceConfig::Http { field, .. } | SourceConfig::File { field, .. } => *field = name,
        }
    }

    pub fn field(&self) -> &str {
        match &self.source {
            SourceConfig::Http { field, .. } | SourceConfig::File { field, .. } => field,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_source_config(config: &SourceConfig) -> SourceConfig {
    match config {
        SourceConfig::Http {
            endpoint,
            field,
            timeout_secs,
        } => SourceConfig::Http {
            endpoint: resolve_env_vars(endpoint),
            field: resolve_env_vars(field),
            timeout_secs: *timeout_secs,
        },
        SourceConfig::File { path, field } => SourceConfig::File {
            path: PathBuf::from(resolve_env_vars(&path.to_string_lossy())),
            field: resolve_env_vars(field),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `scorecard.toml` in the current directory
/// 2. `~/.config/scorecard/config.toml`
///
/// Environment variable override: `SCORECARD_ENDPOINT`.
pub fn load_config() -> Result<ScorecardConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ScorecardConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("scorecard.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ScorecardConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ScorecardConfig::default(),
    };

    apply_env_overrides(&mut config, std::env::var("SCORECARD_ENDPOINT").ok());
    config.source = resolve_source_config(&config.source);

    Ok(config)
}

fn apply_env_overrides(config: &mut ScorecardConfig, endpoint: Option<String>) {
    if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
        config.set_endpoint(endpoint);
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("scorecard"))
}

/// Create a source instance from its configuration.
pub fn create_source(config: &SourceConfig) -> Result<Arc<dyn ScoreSource>> {
    match config {
        SourceConfig::Http {
            endpoint,
            field,
            timeout_secs,
        } => Ok(Arc::new(
            HttpScoreSource::new(endpoint)?
                .with_field(field)
                .with_timeout(*timeout_secs),
        )),
        SourceConfig::File { path, field } => {
            Ok(Arc::new(FileScoreSource::new(path).with_field(field)))
        }
    }
}
