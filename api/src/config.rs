//! Application configuration and registration hooks

pub mod error_config;

pub use ar_shared::config::{AppConfig as Config, ConfigError};
pub use error_config::{configure_error_handling, not_found};
