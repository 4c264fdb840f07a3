use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TOP_K: usize = 50;
pub const DEFAULT_PRECISION: u32 = 6;
pub const DEFAULT_PAGE_LIMIT: usize = 10_000;
pub const MAX_PAGE_LIMIT: usize = 100_000;
pub const MAX_DOCUMENT_BYTES: usize = 6 * 1024 * 1024;

/// f64 carries ~15-17 significant digits; more decimals than this are noise.
const MAX_PRECISION: u32 = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Size of the reported vocabulary.
    pub top_k: usize,
    /// Decimal places kept on reported tf/idf values.
    pub precision: u32,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            precision: DEFAULT_PRECISION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Window used when the caller does not ask for one.
    pub default_limit: usize,
    /// Larger requested windows are clamped to this.
    pub max_limit: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: MAX_PAGE_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentLimits {
    pub max_document_bytes: usize,
}

impl Default for DocumentLimits {
    fn default() -> Self {
        Self {
            max_document_bytes: MAX_DOCUMENT_BYTES,
        }
    }
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub statistics: StatisticsConfig,
    pub pagination: PaginationConfig,
    pub documents: DocumentLimits,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self::default()
    }

    /// Parse a JSON config. Missing sections and fields take their v0 defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.statistics.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "statistics.precision must be at most {MAX_PRECISION}, got {}",
                self.statistics.precision
            )));
        }
        if self.pagination.default_limit == 0 {
            return Err(ConfigError::Invalid(
                "pagination.default_limit must be positive".into(),
            ));
        }
        if self.pagination.default_limit > self.pagination.max_limit {
            return Err(ConfigError::Invalid(format!(
                "pagination.default_limit ({}) exceeds pagination.max_limit ({})",
                self.pagination.default_limit, self.pagination.max_limit
            )));
        }
        if self.documents.max_document_bytes == 0 {
            return Err(ConfigError::Invalid(
                "documents.max_document_bytes must be positive".into(),
            ));
        }
        Ok(())
    }
}
