//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use offtk_application::ports::registry::list_toolkits;
use offtk_domain::error::{Error, Result};
use tracing::debug;

use crate::config::{AppConfig, LoggingConfig, ToolkitsConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `OFFTK__TOOLKITS__PRECEDENCE`)
    pub fn load(&self) -> Result<AppConfig> {
        let (config, source) = self.load_with_source()?;
        source.log();
        Ok(config)
    }

    /// [`load`](Self::load) without logging, also reporting which file was read
    ///
    /// For callers that install the log subscriber from the loaded
    /// configuration and report the source afterwards.
    pub fn load_with_source(&self) -> Result<(AppConfig, ConfigSource)> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let source = match &self.config_path {
            Some(config_path) if config_path.exists() => ConfigSource::File(config_path.clone()),
            Some(config_path) => ConfigSource::Missing(config_path.clone()),
            None => Self::find_default_config_path()
                .map_or(ConfigSource::Defaults, ConfigSource::File),
        };
        if let ConfigSource::File(path) = &source {
            figment = figment.merge(Toml::file(path));
        }

        // Double underscore separates nested keys (e.g., OFFTK__LOGGING__LEVEL)
        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment.extract().with_config_context(|| match &source {
            ConfigSource::File(path) => {
                format!("Failed to extract configuration from {}", path.display())
            }
            _ => "Failed to extract configuration".to_string(),
        })?;

        validate_app_config(&app_config)?;

        Ok((app_config, source))
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Where the loaded configuration file came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// The requested file does not exist; defaults and environment were used
    Missing(PathBuf),
    /// No file requested or found
    Defaults,
}

impl ConfigSource {
    /// Report the source through the active subscriber
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => log_config_loaded(path, true),
            ConfigSource::Missing(path) => log_config_loaded(path, false),
            ConfigSource::Defaults => debug!("No configuration file found, using defaults"),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    validate_toolkits_config(&config.toolkits)?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

fn validate_toolkits_config(config: &ToolkitsConfig) -> Result<()> {
    let known: Vec<&str> = list_toolkits().into_iter().map(|(name, _)| name).collect();
    if let Some(unknown) = config
        .precedence
        .iter()
        .find(|name| !known.contains(&name.trim().to_ascii_lowercase().as_str()))
    {
        return Err(Error::configuration(format!(
            "Unknown toolkit '{unknown}' in toolkits.precedence. Known toolkits: {known:?}"
        )));
    }
    if config.bridge.command.trim().is_empty() {
        return Err(Error::configuration("Bridge command cannot be empty"));
    }
    if config.bridge.timeout_secs == 0 {
        return Err(Error::configuration("Bridge timeout cannot be 0"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set toolkit precedence
    pub fn with_precedence<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.toolkits.precedence = names.into_iter().map(Into::into).collect();
        self
    }

    /// Append discovered toolkits after the precedence list
    pub fn with_register_discovered(mut self, register_discovered: bool) -> Self {
        self.config.toolkits.register_discovered = register_discovered;
        self
    }

    /// Set the bridge program
    pub fn with_bridge_command<S: Into<String>>(mut self, command: S) -> Self {
        self.config.toolkits.bridge.command = command.into();
        self
    }

    /// Set the OpenEye license file
    pub fn with_openeye_license<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.toolkits.openeye.license_path = Some(path.into());
        self
    }

    /// Set the AmberTools bin directory
    pub fn with_ambertools_bin_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.toolkits.ambertools.bin_dir = Some(path.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}
