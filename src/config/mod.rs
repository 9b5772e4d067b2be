// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration module for Comp Trie.
//!
//! This module provides a configuration system that can load settings
//! from files (TOML, YAML, JSON) and override them with environment variables.
//! All configuration values are validated for correctness before use.

use crate::error::config::ConfigError;
use crate::error::{CompTrieError, CompTrieResult};
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod demo;
pub mod trie;

pub use demo::{DemoConfig, OutputFormat};
pub use trie::TrieOptions;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "COMP_TRIE";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Comp Trie.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CompTrieConfig {
    /// Trie construction options
    pub trie: TrieOptions,

    /// Demonstration runner inputs
    pub demo: DemoConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for CompTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.demo.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Comp Trie.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, a file and environment variables.
    ///
    /// Later sources override earlier ones. Environment variables take the
    /// form `<PREFIX>__<SECTION>__<KEY>`, e.g. `COMP_TRIE__LOG__LEVEL=debug`.
    ///
    /// # Returns
    ///
    /// * `Ok(CompTrieConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<CompTrieConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&CompTrieConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let comp_trie_config: CompTrieConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        comp_trie_config.validate()?;
        tracing::debug!(path = ?self.config_path, "Configuration loaded");

        Ok(comp_trie_config)
    }
}

/// Loads the configuration from `path`, falling back to [`DEFAULT_CONFIG_PATH`].
///
/// A missing default file is not an error: built-in defaults and environment
/// overrides are used instead. A missing explicit file is reported.
pub fn load_config(path: Option<&Path>) -> CompTrieResult<CompTrieConfig> {
    if let Some(path) = path {
        return Ok(ConfigLoader::new(Some(path), ENV_PREFIX).load()?);
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    let config = if default_path.exists() {
        ConfigLoader::new(Some(default_path), ENV_PREFIX).load()?
    } else {
        tracing::warn!(
            "Default configuration file not found at: {}",
            DEFAULT_CONFIG_PATH
        );
        ConfigLoader::new(None::<&Path>, ENV_PREFIX).load()?
    };
    Ok(config)
}

/// Writes the built-in defaults to `output` as TOML, creating parent
/// directories as needed.
pub fn write_default_config(output: &Path) -> CompTrieResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&CompTrieConfig::default())
        .map_err(|e| CompTrieError::Custom(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(output, toml)?;

    tracing::debug!(path = ?output, "Default configuration written");
    Ok(())
}
