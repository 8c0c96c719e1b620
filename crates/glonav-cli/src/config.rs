//! Configuration for the `glonav` binary.
//!
//! Resolution order:
//!
//! 1. Built-in defaults
//! 2. The TOML file (`--config` / `GLONAV_CONFIG`, else
//!    `<config dir>/glonav/config.toml` when it exists)
//! 3. `GLONAV_*` environment overrides

use glonav_core::{Error, Result};
use glonav_retrieval::RetrievalConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project name used for the config directory and messages.
pub const PROJECT_NAME: &str = "glonav";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GLONAV_CONFIG";

/// Environment overrides, applied after the file.
pub const ENV_TOP_K: &str = "GLONAV_RETRIEVAL_TOP_K";
pub const ENV_SIMILARITY_THRESHOLD: &str = "GLONAV_SIMILARITY_THRESHOLD";
pub const ENV_MAX_CONTEXT_LENGTH: &str = "GLONAV_MAX_CONTEXT_LENGTH";
pub const ENV_LOG_LEVEL: &str = "GLONAV_LOG_LEVEL";

// ============================================================================
// Config sections
// ============================================================================

/// Top-level configuration file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlonavConfig {
    /// Retrieval behavior.
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Embedding settings.
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[embedding]` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Dimension of the hashing embedder.
    #[serde(default = "default_dimension")]
    pub dimension: usize,
}

fn default_dimension() -> usize {
    256
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
        }
    }
}

/// `[logging]` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl GlonavConfig {
    /// `<platform config dir>/glonav/config.toml`, if the platform has one.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// The explicit path when given, otherwise the default path.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load configuration using the process environment for overrides.
    ///
    /// A missing explicit file is an error; a missing default file means
    /// built-in defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        Self::load_with_env(explicit, |key| std::env::var(key).ok())
    }

    /// Load configuration with a custom environment lookup.
    pub fn load_with_env<F>(explicit: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) if explicit.is_some() => {
                return Err(Error::not_found(
                    "config file",
                    path.display().to_string(),
                ));
            }
            _ => Self::default(),
        };

        config.apply_env_overrides(lookup)?;
        config.retrieval.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply `GLONAV_*` overrides. Unparseable values are errors.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_TOP_K) {
            self.retrieval.top_k = parse_env(ENV_TOP_K, &value)?;
        }
        if let Some(value) = lookup(ENV_SIMILARITY_THRESHOLD) {
            self.retrieval.similarity_threshold = parse_env(ENV_SIMILARITY_THRESHOLD, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_CONTEXT_LENGTH) {
            self.retrieval.max_context_length = parse_env(ENV_MAX_CONTEXT_LENGTH, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = value;
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::config(format!("Invalid {key}='{value}': {e}")))
}

// ============================================================================
// Tests
// ============================================================================
