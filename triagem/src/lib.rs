//! # Triagem
//!
//! Message-intake normalization engine shared by the chat-bot front ends
//! (Telegram, WhatsApp) of a legal-services product. Every text that crosses
//! the bot boundary goes through one or more of three independent components:
//!
//! - **Sanitizer**: repairs encoding, normalizes stray escape syntax, strips
//!   control characters and escapes markdown metacharacters so the text can be
//!   rendered by a markdown chat transport.
//! - **Entity extraction**: pulls emails, phone numbers, CPF/CNPJ tax ids (with
//!   checksum validation), `R$` amounts, deadline mentions and judicial process
//!   numbers out of free text.
//! - **Scoring**: keyword-weighted lead scoring over a conversation and
//!   single-intent detection for response routing.
//!
//! ## Quick Start
//!
//! ```rust
//! use triagem::prelude::*;
//!
//! let safe = sanitize("preço *promocional* até hoje");
//! assert_eq!(safe, "preço \\*promocional\\* até hoje");
//!
//! let amounts = extract_amounts("Honorários de R$ 10.000,00");
//! assert_eq!(amounts.len(), 1);
//!
//! assert!(!validate_cpf("111.111.111-11"));
//!
//! let turns = vec![
//!     ConversationTurn::new("Qual o preço?"),
//!     ConversationTurn::new("Preciso agendar uma demo urgente"),
//! ];
//! let score = score_conversation(&turns);
//! assert_eq!(score.score, 65);
//! assert_eq!(score.qualification, Qualification::Medium);
//! ```
//!
//! Every engine entry point is a pure, synchronous function. Pattern tables
//! are built once on first use and shared read-only, so calls are safe from
//! any number of threads without coordination.

pub mod config;
pub mod engine;
pub mod entity_extraction;
pub mod logging;
pub mod sanitizer;
pub mod scoring;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::engine::{MessageAnalysis, TriagemEngine};

    pub use crate::config::{
        ConfigBuilder, ConfigLoader, LogFormat, LogLevel, LoggingConfig, TriagemConfig,
    };

    pub use crate::sanitizer::{
        Sanitizer, SanitizerConfig, sanitize, sanitize_bytes, sanitize_debug, sanitize_value,
    };

    pub use crate::entity_extraction::{
        EntityExtractionConfig, EntityExtractor, EntityKind, EntityValue, ExtractedEntity,
        PatternEntityExtractor, extract_all, extract_amounts, extract_cnpjs, extract_cpfs,
        extract_deadlines, extract_emails, extract_phones, extract_process_number,
        extract_process_numbers, validate_cnpj, validate_cpf,
    };

    pub use crate::scoring::{
        ConversationTurn, Intent, IntentCategory, IntentScore, LeadSignal, Priority,
        Qualification, ScoringConfig, detect_intent, score_conversation, score_message,
    };

    pub use crate::{Result, TriagemError};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for the ambient parts of Triagem (configuration, logging, I/O).
///
/// The engine functions themselves never fail; they degrade to empty output.
#[derive(Debug, thiserror::Error)]
pub enum TriagemError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// I/O error while reading input or configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed caller input (e.g. a conversation file that is not a JSON array of turns)
    #[error("Invalid input: {0}")]
    Input(String),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for TriagemError {
    fn from(err: crate::config::ConfigError) -> Self {
        TriagemError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for TriagemError {
    fn from(err: serde_json::Error) -> Self {
        TriagemError::Input(err.to_string())
    }
}

/// Result type for Triagem operations
pub type Result<T> = std::result::Result<T, TriagemError>;

/// Build an engine with default configuration.
///
/// No logging subscriber is installed; hosts that want one call [`init`] or
/// [`logging::init`] themselves.
pub fn init_with_defaults() -> Result<engine::TriagemEngine> {
    let config = config::ConfigBuilder::new().build()?;
    Ok(engine::TriagemEngine::new(config))
}

/// Initialize logging from the configuration and build an engine from it.
///
/// The returned guard keeps the non-blocking file writer alive when file
/// logging is configured; drop it only at shutdown.
pub fn init(
    config: config::TriagemConfig,
) -> Result<(engine::TriagemEngine, Option<logging::WorkerGuard>)> {
    config::validate_config(&config)?;

    // An already-installed global subscriber is not an error for embedders
    let guard = logging::init(&config.logging)?;

    Ok((engine::TriagemEngine::new(config), guard))
}
