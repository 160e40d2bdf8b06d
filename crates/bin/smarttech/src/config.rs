//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarttech.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;
use smarttech_app::registry::DeviceRegistry;
use smarttech_domain::error::SmartTechError;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "smarttech.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which devices the station controls.
    pub registry: RegistryConfig,
    /// Terminal output settings.
    pub display: DisplayConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Device list configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Factory keys, in menu order (e.g. `oven`, `belt`, `forno`).
    pub devices: Vec<String>,
}

/// Terminal output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Emit ANSI colours for outcomes and headers.
    pub color: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `smarttech.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is unreadable or
    /// malformed, or if the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("SMARTTECH_DEVICES") {
            self.registry.devices = val
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(val) = lookup("SMARTTECH_COLOR") {
            match val.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.display.color = true,
                "0" | "false" | "no" => self.display.color = false,
                _ => {}
            }
        }
        if let Some(val) = lookup("SMARTTECH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.registry.devices.is_empty() {
            return Err(ConfigError::Validation(
                "registry.devices must list at least one device".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the configured keys into the device registry.
    ///
    /// # Errors
    ///
    /// Returns [`SmartTechError::InvalidArgument`] for an unknown device key,
    /// or [`SmartTechError::Validation`] for a duplicated one.
    pub fn build_registry(&self) -> Result<DeviceRegistry, SmartTechError> {
        DeviceRegistry::from_keys(&self.registry.devices)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            devices: vec!["oven".to_string(), "belt".to_string(), "press".to_string()],
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarttech=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
