//! Configuration management for the `ClimaCep` service
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and validates all settings before the server starts.

use crate::ClimaCepError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `ClimaCep` service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimaCepConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Postal-code directory configuration
    #[serde(default)]
    pub cep: CepConfig,
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Inbound request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

/// Postal-code directory settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CepConfig {
    /// Base URL of the directory service
    #[serde(default = "default_cep_base_url")]
    pub base_url: String,
    /// Outbound request timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout_seconds: u64,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Weather API key, injected via config file or environment
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the weather service
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Outbound request timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout_seconds: u64,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_cep_base_url() -> String {
    "https://viacep.com.br/ws".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_upstream_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for CepConfig {
    fn default() -> Self {
        Self {
            base_url: default_cep_base_url(),
            timeout_seconds: default_upstream_timeout(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_weather_base_url(),
            timeout_seconds: default_upstream_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ClimaCepConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cep: CepConfig::default(),
            weather: WeatherConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ClimaCepConfig {
    /// Load configuration from `config.toml` (if present) and environment
    /// variables with the `CLIMACEP` prefix.
    pub fn load() -> Result<Self> {
        Self::load_from_path(Some(PathBuf::from("config.toml")))
    }

    /// Load configuration from the specified file path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(config_file) = config_path
            && config_file.exists()
        {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. CLIMACEP_WEATHER__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("CLIMACEP")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: Self = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the weather API key
    pub fn validate_api_key(&self) -> Result<()> {
        if self.weather.api_key.is_empty() {
            return Err(ClimaCepError::config(
                "Weather API key is required. Set weather.api_key in config.toml or the CLIMACEP_WEATHER__API_KEY environment variable."
            ).into());
        }

        if self.weather.api_key.len() < 8 {
            return Err(ClimaCepError::config(
                "Weather API key appears to be invalid (too short). Please check your API key.",
            )
            .into());
        }

        if self.weather.api_key.len() > 100 {
            return Err(ClimaCepError::config(
                "Weather API key appears to be invalid (too long). Please check your API key.",
            )
            .into());
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.cep.timeout_seconds == 0 || self.weather.timeout_seconds == 0 {
            return Err(
                ClimaCepError::config("Upstream timeouts must be at least 1 second").into(),
            );
        }

        if self.cep.timeout_seconds > 300 || self.weather.timeout_seconds > 300 {
            return Err(
                ClimaCepError::config("Upstream timeouts cannot exceed 300 seconds").into(),
            );
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(
                ClimaCepError::config("Request timeout must be at least 1 second").into(),
            );
        }

        if self.server.request_timeout_seconds > 300 {
            return Err(
                ClimaCepError::config("Request timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ClimaCepError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ClimaCepError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("CEP directory", &self.cep.base_url),
            ("weather provider", &self.weather.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ClimaCepError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
