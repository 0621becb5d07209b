//! TOML-based service configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::dispatch::DispatchSettings;

/// Top-level service configuration parsed from TOML.
///
/// All fields have defaults, so an empty file is a valid configuration. Load
/// with [`ServiceConfig::from_toml_file`] or use [`ServiceConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Dispatch engine parameters.
    #[serde(default)]
    pub dispatch: DispatchSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"server.port"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ServiceConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.server.host.trim().is_empty() {
            errors.push(ConfigError {
                field: "server.host".into(),
                message: "must not be empty".into(),
            });
        }

        if tracing_subscriber::EnvFilter::try_new(&self.logging.filter).is_err() {
            errors.push(ConfigError {
                field: "logging.filter".into(),
                message: format!("\"{}\" is not a valid filter directive", self.logging.filter),
            });
        }

        let co2 = self.dispatch.co2_tons_per_mwh;
        if !co2.is_finite() || co2 < 0.0 {
            errors.push(ConfigError {
                field: "dispatch.co2_tons_per_mwh".into(),
                message: format!("must be a finite number >= 0, got {co2}"),
            });
        }

        errors
    }
}
