//! Configuration module
//!
//! - `environment` - environment detection and logging configuration
//! - `serializer` - JSON settings applied to every response body
//! - `server` - HTTP server configuration

pub mod environment;
pub mod serializer;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use environment::{Environment, LoggingConfig};
pub use serializer::{SerializerSettings, JSON_CONTENT_TYPE};
pub use server::ServerConfig;

/// Configuration loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Response serialization settings
    #[serde(default)]
    pub serializer: SerializerSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();

        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env(environment),
            serializer: SerializerSettings::from_env(),
        })
    }
}
