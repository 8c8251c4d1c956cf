//! Simple CLI configuration loader for the balti dictionary
//!
//! Implements single-source priority loading with env and flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./balti.json or ./.balti/config.json
//! 3. User config directory: <config_dir>/balti/config.json
//! 4. Built-in defaults (no files)
//!
//! Environment variables (`BALTI_FUZZY_THRESHOLD`, `BALTI_CACHE_TTL_SECS`,
//! `BALTI_DICTIONARY`) are applied on top of the file, then flags on top of those.

use anyhow::{anyhow, Context, Result};
use balti_core::SearchSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Dictionary file (JSON array of entries)
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    /// Search and cache settings
    #[serde(default, flatten)]
    pub search: SearchSettings,
}

/// Fully resolved configuration for the CLI
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Dictionary file, if any; the built-in sample is used otherwise
    pub dictionary: Option<PathBuf>,

    /// Validated search settings
    pub settings: SearchSettings,

    /// File the configuration was read from
    pub source: Option<PathBuf>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    dictionary_override: Option<PathBuf>,
    threshold_override: Option<f64>,
    /// Directory searched for project-local config
    working_dir: Option<PathBuf>,
    /// Directory searched for user config
    config_home: Option<PathBuf>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            dictionary_override: None,
            threshold_override: None,
            working_dir: None,
            config_home: dirs::config_dir(),
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set dictionary file override
    pub fn with_dictionary_override(mut self, path: PathBuf) -> Self {
        self.dictionary_override = Some(path);
        self
    }

    /// Set fuzzy threshold override
    pub fn with_threshold_override(mut self, threshold: f64) -> Self {
        self.threshold_override = Some(threshold);
        self
    }

    /// Search this directory instead of the process working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Search this directory instead of the user config directory
    pub fn with_config_home(mut self, dir: PathBuf) -> Self {
        self.config_home = Some(dir);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<ResolvedConfig> {
        self.load_with_env(|name| std::env::var(name).ok()).await
    }

    async fn load_with_env<F>(&self, env: F) -> Result<ResolvedConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Step 1: Find and load base configuration
        let (mut config, source) = if let Some(override_path) = &self.config_override {
            let (config, path) = self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?;
            (config, Some(path))
        } else {
            match self.search_and_load().await? {
                Some((config, path)) => (config, Some(path)),
                None => (RawConfig::default(), None),
            }
        };

        if let Some(path) = &source {
            debug!("Loaded configuration from {}", path.display());
        }

        // Step 2: Apply environment overrides
        apply_env_overrides(&mut config, env)?;

        // Step 3: Apply flag overrides
        if let Some(dictionary) = &self.dictionary_override {
            config.dictionary = Some(dictionary.clone());
        }
        if let Some(threshold) = self.threshold_override {
            config.search.fuzzy_threshold = threshold;
        }

        // Step 4: Validate
        config
            .search
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(ResolvedConfig {
            dictionary: config.dictionary,
            settings: config.search,
            source,
        })
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<Option<(RawConfig, PathBuf)>> {
        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let mut candidates = vec![
            cwd.join("balti.json"),
            cwd.join(".balti").join("config.json"),
        ];
        if let Some(config_home) = &self.config_home {
            candidates.push(config_home.join("balti").join("config.json"));
        }

        for candidate in candidates {
            if candidate.is_file() {
                let config = self.load_file(&candidate).await?;
                return Ok(Some((config, candidate)));
            }
        }

        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<(RawConfig, PathBuf)> {
        if path.is_file() {
            Ok((self.load_file(path).await?, path.to_path_buf()))
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                Ok((self.load_file(&config_file).await?, config_file))
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_env_overrides<F>(config: &mut RawConfig, env: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = env("BALTI_FUZZY_THRESHOLD") {
        config.search.fuzzy_threshold = value
            .parse()
            .with_context(|| format!("Invalid BALTI_FUZZY_THRESHOLD: {}", value))?;
    }

    if let Some(value) = env("BALTI_CACHE_TTL_SECS") {
        config.search.cache.default_ttl_secs = value
            .parse()
            .with_context(|| format!("Invalid BALTI_CACHE_TTL_SECS: {}", value))?;
    }

    if let Some(value) = env("BALTI_DICTIONARY") {
        config.dictionary = Some(PathBuf::from(value));
    }

    Ok(())
}
