//! Configuration loading and typed config structures for the server.
//!
//! Configuration is read from an optional YAML file. The path comes from
//! `MERGINGTON_CONFIG` when set, otherwise `mergington-config.yaml` in the
//! working directory is used if it exists. Every field has a default, so the
//! server starts with no file at all.

use std::path::Path;

use mergington_api::{DEFAULT_REDIRECT_TARGET, ServerConfig};
use serde::Deserialize;

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "mergington-config.yaml";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "MERGINGTON_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held an unusable value.
    #[error("invalid {var}: {message}")]
    InvalidEnv {
        /// The offending variable.
        var: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Listener and routing settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the configured file (if any) and apply
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be read, a file
    /// is not valid YAML, or an environment override is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            Self::from_file(Path::new(&path))?
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                Self::from_file(default_path)?
            } else {
                Self::default()
            }
        };
        config.apply_env_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply `HOST` and `PORT` overrides using `lookup` to read variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `PORT` is not a valid port.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::InvalidEnv {
                var: "PORT",
                message: format!("{e}"),
            })?;
        }
        Ok(())
    }

    /// The listener settings in the form the API server takes.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.server.host.clone(),
            port: self.server.port,
        }
    }
}

/// Listener and routing settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Where `GET /` redirects browsers.
    #[serde(default = "default_redirect_target")]
    pub redirect_target: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            redirect_target: default_redirect_target(),
        }
    }
}

fn default_host() -> String {
    ServerConfig::default().host
}

fn default_port() -> u16 {
    ServerConfig::default().port
}

fn default_redirect_target() -> String {
    DEFAULT_REDIRECT_TARGET.to_owned()
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    String::from("info")
}
