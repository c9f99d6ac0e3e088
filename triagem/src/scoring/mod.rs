//! Intent and urgency scoring.
//!
//! Two deterministic keyword heuristics:
//!
//! - [`score_conversation`] accumulates category weights over every message
//!   of a conversation into a bounded lead score with a qualification tier.
//! - [`detect_intent`] picks the single best-matching intent category of one
//!   message for response routing.

pub mod intent;
pub mod keywords;
pub mod lead;

pub use intent::{Intent, IntentCategory, IntentClassifier, detect_intent, tokenize};
pub use lead::{
    ConversationTurn, IntentScore, LeadScorer, LeadSignal, Priority, Qualification,
    ScoringConfig, ScoringWeights, score_conversation, score_message,
};
