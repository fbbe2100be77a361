//! Client configuration

use crate::error::{Result, SqueezeError};
use crate::upload::transport::DEFAULT_CHUNK_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log level for the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Off => write!(f, "off"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Configuration for the upload client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientConfig {
    /// Base URL of the compression service (default: http://localhost:8000)
    pub endpoint: String,

    /// Path of the upload route (default: /upload)
    pub upload_path: String,

    /// Bytes per progress tick (default: 64 KiB)
    pub chunk_size: usize,

    /// Log level (default: warn)
    pub log_level: LogLevel,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            upload_path: "/upload".to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            log_level: LogLevel::Warn,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service base URL
    pub fn endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the upload route
    pub fn upload_path<S: Into<String>>(mut self, path: S) -> Self {
        self.upload_path = path.into();
        self
    }

    /// Set the progress granularity in bytes
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Set the log level
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Full URL requests are posted to
    pub fn upload_url(&self) -> String {
        let base = self.endpoint.trim_end_matches('/');
        if self.upload_path.starts_with('/') {
            format!("{}{}", base, self.upload_path)
        } else {
            format!("{}/{}", base, self.upload_path)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(SqueezeError::invalid_parameter(
                "endpoint",
                format!("Endpoint must be an http(s) URL: {}", self.endpoint),
            ));
        }

        if self.chunk_size == 0 {
            return Err(SqueezeError::invalid_parameter(
                "chunk_size",
                "Chunk size must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Convert the configuration to a JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SqueezeError::from)
    }

    /// Create a configuration from a JSON string
    ///
    /// Missing keys take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let partial: PartialConfig = serde_json::from_str(json)?;
        Ok(partial.apply(Self::default()))
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SqueezeError::config_error(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Config file contents before defaults are filled in
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialConfig {
    endpoint: Option<String>,
    upload_path: Option<String>,
    chunk_size: Option<usize>,
    log_level: Option<LogLevel>,
}

impl PartialConfig {
    fn apply(self, mut config: ClientConfig) -> ClientConfig {
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(path) = self.upload_path {
            config.upload_path = path;
        }
        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        config
    }
}
