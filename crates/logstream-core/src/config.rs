//! Configuration file parsing for logstream
//!
//! Supports multiple configuration file formats:
//! - TOML (.toml)
//! - YAML (.yaml, .yml)
//! - JSON (.json)

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::constants::{user_config_dir, CONFIG_FILES};
use crate::error::{Error, Result};
use crate::types::{CompiledSortPattern, SortPattern};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// Detect format from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Configuration file structure (logstream.toml/yaml/json)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub streams: Vec<StreamConfig>,
}

/// One configured family of log files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    pub name: String,
    /// Root directory searched recursively
    pub log_directory: PathBuf,
    #[serde(flatten)]
    pub pattern: SortPattern,
}

impl StreamConfig {
    pub fn compile(&self) -> Result<CompiledSortPattern> {
        self.pattern
            .compile()
            .map_err(|e| Error::config(format!("stream '{}': {}", self.name, e)))
    }
}

impl ConfigFile {
    /// Load config from file, automatically detecting format from extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            Error::ConfigError(format!(
                "Unsupported config file extension: {}. Expected .toml, .yaml, .yml, or .json",
                path.display()
            ))
        })?;

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, format)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config content with specified format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => Self::from_toml(content),
            ConfigFormat::Yaml => Self::from_yaml(content),
            ConfigFormat::Json => Self::from_json(content),
        }
    }

    /// Parse TOML config content
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ConfigFile = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse YAML config content
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: ConfigFile = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Parse JSON config content
    pub fn from_json(content: &str) -> Result<Self> {
        let config: ConfigFile = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Find and load a config file from `dir`, then from the user config directory
    pub fn find_and_load(dir: &Path) -> Result<(Self, PathBuf)> {
        let mut search_dirs = vec![dir.to_path_buf()];
        search_dirs.extend(user_config_dir());

        for search_dir in &search_dirs {
            for name in CONFIG_FILES {
                let path = search_dir.join(name);
                if path.exists() {
                    let config = Self::load(&path)?;
                    return Ok((config, path));
                }
            }
        }

        Err(Error::ConfigError(format!(
            "No config file found in {}. Expected one of: {:?}",
            dir.display(),
            CONFIG_FILES
        )))
    }

    /// Stream names must be present and unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for stream in &self.streams {
            if stream.name.trim().is_empty() {
                return Err(Error::config("stream name must not be empty"));
            }
            if !seen.insert(stream.name.as_str()) {
                return Err(Error::config(format!(
                    "duplicate stream name: {}",
                    stream.name
                )));
            }
        }
        Ok(())
    }

    pub fn stream(&self, name: &str) -> Option<&StreamConfig> {
        self.streams.iter().find(|s| s.name == name)
    }
}
