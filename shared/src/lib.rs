//! Shared types for uniform API responses
//!
//! This crate provides the pieces every other layer agrees on:
//! - The error catalog (stable keys, default codes and messages)
//! - The result envelope written as the body of every response
//! - Configuration types

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, Environment, LoggingConfig, SerializerSettings, ServerConfig};
pub use errors::{lookup, CatalogError, ErrorKey};
pub use types::{ResponseStatus, ResultEnvelope};
