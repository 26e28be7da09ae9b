//! Configuration for Lexis.
//!
//! Configuration lives in `~/.lexis/config.toml` unless `LEXIS_CONFIG_PATH`
//! points elsewhere. Every section has defaults, so a missing file is not an
//! error for callers that use [`LexisConfig::load_or_default`].
//!
//! # Environment overrides
//!
//! | Variable              | Field                   |
//! |-----------------------|-------------------------|
//! | `LEXIS_LOG_LEVEL`     | `general.log_level`     |
//! | `LEXIS_CORPUS_PATH`   | `corpus.path`           |
//! | `LEXIS_SIMULATE_ROOT` | `query.simulate_root`   |
//!
//! # Example
//!
//! ```no_run
//! use lexis_core::config::LexisConfig;
//!
//! # async fn example() -> lexis_core::Result<()> {
//! let config = LexisConfig::load_or_default().await?;
//! println!("Log level: {}", config.general.log_level);
//! # Ok(())
//! # }
//! ```

use crate::error::{LexisError, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The current configuration version
pub const CONFIG_VERSION: &str = "0.1.0";

// Environment variable names
pub const ENV_CONFIG_PATH: &str = "LEXIS_CONFIG_PATH";
pub const ENV_LOG_LEVEL: &str = "LEXIS_LOG_LEVEL";
pub const ENV_CORPUS_PATH: &str = "LEXIS_CORPUS_PATH";
pub const ENV_SIMULATE_ROOT: &str = "LEXIS_SIMULATE_ROOT";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexisConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

/// General configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Configuration version
    pub version: String,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
}

/// Where the corpus snapshot comes from and how the graph is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Path to the JSON corpus snapshot
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Add the missing mirror edge for every relation that has an inverse.
    /// When disabled, a missing mirror edge fails construction.
    #[serde(default = "default_true")]
    pub complete_inverse_edges: bool,
}

/// Query defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Override for the `simulate_root` flag of distance and similarity
    /// queries. Unset, similarity scores simulate a root and distances do not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulate_root: Option<bool>,
    /// Memoize per-node depths
    #[serde(default = "default_true")]
    pub cache_depths: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: None,
            complete_inverse_edges: true,
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            simulate_root: None,
            cache_depths: true,
        }
    }
}

impl LexisConfig {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed
    pub async fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path).await
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub async fn load_from_path(path: &Path) -> Result<Self> {
        debug!("Loading configuration from: {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LexisError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|e| LexisError::Config(format!("Failed to parse config file: {}", e)))?;

        config.merge_env_vars()?;
        config.validate()?;

        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default location, falling back to
    /// defaults (with environment overrides) when no file exists
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file is invalid
    pub async fn load_or_default() -> Result<Self> {
        let config_path = Self::config_path()?;

        if tokio::fs::try_exists(&config_path).await.unwrap_or(false) {
            Self::load_from_path(&config_path).await
        } else {
            debug!(
                "No configuration at {}, using defaults",
                config_path.display()
            );
            let mut config = Self::default();
            config.merge_env_vars()?;
            config.validate()?;
            Ok(config)
        }
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or written
    pub async fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path).await
    }

    /// Save configuration to a specific path atomically
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or written
    pub async fn save_to_path(&self, path: &Path) -> Result<()> {
        debug!("Saving configuration to: {}", path.display());

        self.validate()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    LexisError::Config(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let content = self.export_toml()?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("toml.tmp");

        tokio::fs::write(&temp_path, content)
            .await
            .map_err(|e| LexisError::Config(format!("Failed to write config file: {}", e)))?;

        tokio::fs::rename(&temp_path, path)
            .await
            .map_err(|e| LexisError::Config(format!("Failed to rename config file: {}", e)))?;

        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(LexisError::Config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.general.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        if let Some(path) = &self.corpus.path {
            if path.as_os_str().is_empty() {
                return Err(LexisError::Config(
                    "corpus.path must not be empty when set".to_string(),
                ));
            }
        }

        debug!("Configuration validation passed");
        Ok(())
    }

    /// Merge environment variable overrides into the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    pub fn merge_env_vars(&mut self) -> Result<()> {
        if let Ok(log_level) = std::env::var(ENV_LOG_LEVEL) {
            debug!("Overriding log_level from environment: {}", log_level);
            self.general.log_level = log_level;
        }

        if let Ok(corpus_path) = std::env::var(ENV_CORPUS_PATH) {
            debug!("Overriding corpus path from environment: {}", corpus_path);
            self.corpus.path = Some(PathBuf::from(corpus_path));
        }

        if let Ok(simulate_root) = std::env::var(ENV_SIMULATE_ROOT) {
            let flag = parse_bool(&simulate_root).ok_or_else(|| {
                LexisError::Config(format!(
                    "Invalid {} value '{}', expected true or false",
                    ENV_SIMULATE_ROOT, simulate_root
                ))
            })?;
            self.query.simulate_root = Some(flag);
        }

        Ok(())
    }

    /// Get the base Lexis directory path (~/.lexis/)
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(config_path) = std::env::var(ENV_CONFIG_PATH) {
            let path = PathBuf::from(config_path);
            if let Some(parent) = path.parent() {
                return Ok(parent.to_path_buf());
            }
        }

        let base_dirs = BaseDirs::new()
            .ok_or_else(|| LexisError::Config("Could not determine home directory".to_string()))?;

        Ok(base_dirs.home_dir().join(".lexis"))
    }

    /// Get the configuration file path (~/.lexis/config.toml)
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(config_path) = std::env::var(ENV_CONFIG_PATH) {
            return Ok(PathBuf::from(config_path));
        }

        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Export configuration to a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn export_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| LexisError::Config(format!("Failed to export config to TOML: {}", e)))
    }

    /// Import configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization or validation fails
    pub fn import_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| LexisError::Config(format!("Failed to import config from TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
