//! Command handlers for the Triagem CLI

pub mod entity;
pub mod score;
pub mod text;

pub use entity::{handle_extract_command, handle_validate_command};
pub use score::handle_score_command;
pub use text::{handle_analyze_command, handle_intent_command, handle_sanitize_command};
