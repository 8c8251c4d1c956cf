//! Search and cache settings

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;

/// Default fuzzy match threshold
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Default time-to-live for cached results (5 minutes)
pub const DEFAULT_TTL_SECS: u64 = 5 * 60;

/// Default period of the background expiry sweep
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Settings for the search result cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// TTL applied by `set` when no explicit TTL is given
    pub default_ttl_secs: u64,

    /// Period of the background expiry sweep
    pub sweep_interval_secs: u64,

    /// Optional cap on the number of cached queries
    pub max_entries: Option<usize>,
}

impl CacheSettings {
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            default_ttl_secs: DEFAULT_TTL_SECS,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            max_entries: None,
        }
    }
}

/// Settings for dictionary search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Minimum fuzzy score (0.0 to 1.0) an entry needs to be kept
    pub fuzzy_threshold: f64,

    /// Maximum number of results returned per query
    pub result_limit: Option<usize>,

    /// Result cache settings
    pub cache: CacheSettings,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            result_limit: None,
            cache: CacheSettings::default(),
        }
    }
}

impl SearchSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fuzzy threshold
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    /// Set the maximum number of results
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = Some(limit);
        self
    }

    /// Replace the cache settings
    pub fn with_cache(mut self, cache: CacheSettings) -> Self {
        self.cache = cache;
        self
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "fuzzy_threshold".to_string(),
                value: self.fuzzy_threshold.to_string(),
            }
            .into());
        }

        if self.cache.sweep_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.sweep_interval_secs".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        if self.cache.max_entries == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "cache.max_entries".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Load settings from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(path).await?;
        let settings: SearchSettings = serde_json::from_str(&content)?;
        settings.validate()?;

        Ok(settings)
    }
}
