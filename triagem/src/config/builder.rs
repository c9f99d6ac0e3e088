//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::entity_extraction::{EntityExtractionConfig, EntityKind};
use crate::sanitizer::SanitizerConfig;
use crate::scoring::{ScoringConfig, ScoringWeights};
use std::path::Path;

/// Builder for creating TriagemConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: TriagemConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: TriagemConfig::default(),
        }
    }

    /// Start from an existing configuration (e.g. one produced by [`super::ConfigLoader`]).
    pub fn from_config(config: TriagemConfig) -> Self {
        Self { config }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file instead of stdout.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.stdout = false;
        self
    }

    /// Use default logging configuration (console output at Info level)
    pub fn with_default_logging(mut self) -> Self {
        self.config.logging = LoggingConfig {
            level: LogLevel::Info,
            format: LogFormat::Json,
            file: None,
            stdout: true,
        };
        self
    }

    /// Replace the sanitizer configuration.
    pub fn with_sanitizer_config(mut self, config: SanitizerConfig) -> Self {
        self.config.sanitizer = config;
        self
    }

    /// Turn markdown escaping off, for plain-text transports.
    pub fn without_markdown_escaping(mut self) -> Self {
        self.config.sanitizer.escape_markdown = false;
        self
    }

    /// Truncate sanitizer input to at most `max_chars` characters.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.config.sanitizer.max_chars = Some(max_chars);
        self
    }

    /// Replace the entity extraction configuration.
    pub fn with_extraction_config(mut self, config: EntityExtractionConfig) -> Self {
        self.config.extraction = config;
        self
    }

    /// Restrict extraction to the given entity kinds.
    pub fn with_entity_kinds(mut self, kinds: Vec<EntityKind>) -> Self {
        self.config.extraction.enabled_kinds = kinds;
        self
    }

    /// Collapse repeated entities with the same kind and normalized value.
    pub fn with_deduplication(mut self, enabled: bool) -> Self {
        self.config.extraction.deduplicate = enabled;
        self
    }

    /// Replace the scoring configuration.
    pub fn with_scoring_config(mut self, config: ScoringConfig) -> Self {
        self.config.scoring = config;
        self
    }

    /// Replace the per-category lead scoring weights.
    pub fn with_scoring_weights(mut self, weights: ScoringWeights) -> Self {
        self.config.scoring.weights = weights;
        self
    }

    /// Set the qualification thresholds (`medium <= score < high` is medium).
    pub fn with_thresholds(mut self, medium: u8, high: u8) -> Self {
        self.config.scoring.medium_threshold = medium;
        self.config.scoring.high_threshold = high;
        self
    }

    /// Create a configuration for development.
    ///
    /// Debug-level logging with the readable development formatter.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Default)
    }

    /// Create a configuration for automated testing.
    ///
    /// Logs only warnings, compactly, so test output stays readable.
    pub fn testing() -> Self {
        Self::new()
            .with_log_level(LogLevel::Warn)
            .with_log_format(LogFormat::Compact)
    }

    /// Create a production configuration: JSON logs at Info level.
    pub fn production() -> Self {
        Self::new().with_default_logging()
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<TriagemConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
