//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;
use crate::entity_extraction::EntityExtractionConfig;
use crate::sanitizer::SanitizerConfig;
use crate::scoring::ScoringConfig;

/// Validate the entire configuration.
pub fn validate_config(config: &TriagemConfig) -> Result<(), ConfigError> {
    validate_logging_config(&config.logging)?;
    validate_sanitizer_config(&config.sanitizer)?;
    validate_extraction_config(&config.extraction)?;
    validate_scoring_config(&config.scoring)?;

    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if let Some(file) = &config.file
        && file.as_os_str().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Log file path cannot be empty".to_string(),
        ));
    }

    if config.file.is_some() && config.stdout {
        return Err(ConfigError::ValidationError(
            "Log file and stdout are exclusive; set stdout = false to log to a file".to_string(),
        ));
    }

    Ok(())
}

fn validate_sanitizer_config(config: &SanitizerConfig) -> Result<(), ConfigError> {
    if config.max_chars == Some(0) {
        return Err(ConfigError::ValidationError(
            "Sanitizer max_chars must be greater than zero when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_extraction_config(config: &EntityExtractionConfig) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&config.confidence_threshold) {
        return Err(ConfigError::ValidationError(format!(
            "Extraction confidence threshold must be within 0.0..=1.0, got {}",
            config.confidence_threshold
        )));
    }

    if config.max_entities == Some(0) {
        return Err(ConfigError::ValidationError(
            "max_entities must be greater than zero when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_scoring_config(config: &ScoringConfig) -> Result<(), ConfigError> {
    if config.max_score == 0 {
        return Err(ConfigError::ValidationError(
            "Maximum score must be greater than zero".to_string(),
        ));
    }

    if config.medium_threshold >= config.high_threshold {
        return Err(ConfigError::ValidationError(format!(
            "Medium threshold ({}) must be lower than high threshold ({})",
            config.medium_threshold, config.high_threshold
        )));
    }

    if config.high_threshold > config.max_score {
        return Err(ConfigError::ValidationError(format!(
            "High threshold ({}) cannot exceed the maximum score ({})",
            config.high_threshold, config.max_score
        )));
    }

    Ok(())
}
