//! Configuration types for hashparam

use crate::error::HashParamError;
use crate::traits::HashParamResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HashParamConfig {
    /// Logging level
    pub log_level: String,

    /// Location synchronization configuration
    pub sync: SyncConfig,
}

impl Default for HashParamConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            sync: SyncConfig::default(),
        }
    }
}

impl HashParamConfig {
    pub fn from_json(json: &str) -> HashParamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> HashParamResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> HashParamResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HashParamError::ConfigError(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }
}

/// Location synchronization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// URL length above which a commit is reported as oversized
    pub max_url_length: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_url_length: 2000, // legacy IE limit
        }
    }
}
