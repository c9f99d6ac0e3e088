//! Configuration system for Triagem.
//!
//! Configuration can be assembled with [`ConfigBuilder`] or loaded from
//! files and environment variables with [`ConfigLoader`]. Either way the
//! result is validated before use. The engine reads it once at construction
//! and never mutates it.

mod builder;
mod loader;
mod models;
#[cfg(test)]
mod tests;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Default configuration file names that the loader will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "triagem.toml",
    "triagem.yaml",
    "triagem.yml",
    "triagem.json",
    ".triagem/config.toml",
    ".triagem/config.yaml",
    ".triagem/config.yml",
    ".triagem/config.json",
];

/// Environment variable prefix for Triagem configuration
pub const ENV_PREFIX: &str = "TRIAGEM_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
