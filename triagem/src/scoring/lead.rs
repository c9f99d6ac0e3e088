//! Keyword-weighted lead scoring over a conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::keywords::{
    IMMEDIACY_KEYWORDS, ORGANIZATION_KEYWORDS, PRICE_KEYWORDS, SCHEDULING_KEYWORDS,
    URGENCY_KEYWORDS, contains_any,
};

/// One message of a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationTurn {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ConversationTurn {
    /// A turn without a timestamp.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: None,
        }
    }

    pub fn at(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            timestamp: Some(timestamp),
        }
    }
}

impl From<&str> for ConversationTurn {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Named reasons behind a lead score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum LeadSignal {
    PriceInterest,
    DemoInterest,
    Urgency,
    Organization,
    Immediacy,
}

impl LeadSignal {
    /// Every signal, in the order messages are tested.
    pub const ALL: [LeadSignal; 5] = [
        LeadSignal::PriceInterest,
        LeadSignal::DemoInterest,
        LeadSignal::Urgency,
        LeadSignal::Organization,
        LeadSignal::Immediacy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSignal::PriceInterest => "price_interest",
            LeadSignal::DemoInterest => "demo_interest",
            LeadSignal::Urgency => "urgency",
            LeadSignal::Organization => "organization",
            LeadSignal::Immediacy => "immediacy",
        }
    }

    /// Keywords that trigger this signal.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            LeadSignal::PriceInterest => PRICE_KEYWORDS,
            LeadSignal::DemoInterest => SCHEDULING_KEYWORDS,
            LeadSignal::Urgency => URGENCY_KEYWORDS,
            LeadSignal::Organization => ORGANIZATION_KEYWORDS,
            LeadSignal::Immediacy => IMMEDIACY_KEYWORDS,
        }
    }

    /// Points this signal adds to a message's score.
    pub fn weight(&self, weights: &ScoringWeights) -> u8 {
        match self {
            LeadSignal::PriceInterest => weights.price,
            LeadSignal::DemoInterest => weights.scheduling,
            LeadSignal::Urgency => weights.urgency,
            LeadSignal::Organization => weights.organization,
            LeadSignal::Immediacy => weights.immediacy,
        }
    }
}

impl fmt::Display for LeadSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualification tier derived from the score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Qualification {
    Low,
    Medium,
    High,
}

impl fmt::Display for Qualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualification::Low => write!(f, "low"),
            Qualification::Medium => write!(f, "medium"),
            Qualification::High => write!(f, "high"),
        }
    }
}

/// Routing priority; mirrors the qualification tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl From<Qualification> for Priority {
    fn from(qualification: Qualification) -> Self {
        match qualification {
            Qualification::Low => Priority::Low,
            Qualification::Medium => Priority::Medium,
            Qualification::High => Priority::High,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// Result of scoring a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntentScore {
    /// Accumulated score, capped at the configured maximum
    pub score: u8,
    pub qualification: Qualification,
    pub priority: Priority,
    /// Signals triggered by at least one message
    pub signals: BTreeSet<LeadSignal>,
    /// Number of messages that were scored
    pub messages_scored: usize,
}

impl IntentScore {
    pub fn has_signal(&self, signal: LeadSignal) -> bool {
        self.signals.contains(&signal)
    }
}

/// Points per matched keyword category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringWeights {
    pub price: u8,
    pub scheduling: u8,
    pub urgency: u8,
    pub organization: u8,
    pub immediacy: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            price: 20,
            scheduling: 30,
            urgency: 15,
            organization: 10,
            immediacy: 20,
        }
    }
}

/// Configuration for lead scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    /// Scores at or above this are high
    pub high_threshold: u8,
    /// Scores at or above this (and below high) are medium
    pub medium_threshold: u8,
    /// Upper bound of the accumulated score
    pub max_score: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            high_threshold: 70,
            medium_threshold: 40,
            max_score: 100,
        }
    }
}

impl ScoringConfig {
    /// Tier for a score under these thresholds.
    pub fn qualify(&self, score: u8) -> Qualification {
        if score >= self.high_threshold {
            Qualification::High
        } else if score >= self.medium_threshold {
            Qualification::Medium
        } else {
            Qualification::Low
        }
    }
}

/// Scores conversations with a fixed [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct LeadScorer {
    config: ScoringConfig,
}

impl LeadScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Signals matched by a single message.
    pub fn message_signals(text: &str) -> BTreeSet<LeadSignal> {
        let lowered = text.to_lowercase();
        LeadSignal::ALL
            .into_iter()
            .filter(|signal| contains_any(&lowered, signal.keywords()))
            .collect()
    }

    /// Score a conversation. Each category counts at most once per message;
    /// scores add up across messages and are capped at `max_score`.
    pub fn score_conversation(&self, turns: &[ConversationTurn]) -> IntentScore {
        let mut total: u32 = 0;
        let mut signals = BTreeSet::new();

        for turn in turns {
            for signal in Self::message_signals(&turn.text) {
                total = total.saturating_add(u32::from(signal.weight(&self.config.weights)));
                signals.insert(signal);
            }
        }

        let score = total.min(u32::from(self.config.max_score)) as u8;
        let qualification = self.config.qualify(score);

        tracing::debug!(
            messages = turns.len(),
            raw_total = total,
            score,
            %qualification,
            "scored conversation"
        );

        IntentScore {
            score,
            qualification,
            priority: qualification.into(),
            signals,
            messages_scored: turns.len(),
        }
    }

    /// Score a single message.
    pub fn score_message(&self, text: &str) -> IntentScore {
        self.score_conversation(&[ConversationTurn::new(text)])
    }
}

/// Score a conversation with the default weights and thresholds.
pub fn score_conversation(turns: &[ConversationTurn]) -> IntentScore {
    LeadScorer::default().score_conversation(turns)
}

/// Score a single message with the default weights and thresholds.
pub fn score_message(text: &str) -> IntentScore {
    LeadScorer::default().score_message(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turns(texts: &[&str]) -> Vec<ConversationTurn> {
        texts.iter().copied().map(ConversationTurn::from).collect()
    }

    #[test]
    fn test_empty_conversation_is_low() {
        let result = score_conversation(&[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.qualification, Qualification::Low);
        assert_eq!(result.priority, Priority::Low);
        assert!(result.signals.is_empty());
        assert_eq!(result.messages_scored, 0);
    }

    #[test]
    fn test_price_and_demo_conversation() {
        let result = score_conversation(&turns(&[
            "Qual o preço?",
            "Preciso agendar uma demo urgente",
        ]));

        assert_eq!(result.score, 65);
        assert_eq!(result.qualification, Qualification::Medium);
        assert_eq!(result.priority, Priority::Medium);
        assert!(result.has_signal(LeadSignal::PriceInterest));
        assert!(result.has_signal(LeadSignal::DemoInterest));
        assert!(result.has_signal(LeadSignal::Urgency));
        assert!(!result.has_signal(LeadSignal::Immediacy));
        assert_eq!(result.messages_scored, 2);
    }

    #[test]
    fn test_category_counts_once_per_message() {
        // three price keywords, one message
        let result = score_message("preço, valor e custo do plano");
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_category_accumulates_across_messages() {
        let result = score_conversation(&turns(&["qual o valor?", "e o preço do plano?"]));
        assert_eq!(result.score, 40);
        assert_eq!(result.qualification, Qualification::Medium);
    }

    #[test]
    fn test_score_is_capped() {
        let text = "Preciso agendar hoje, a empresa quer saber o preço";
        let result = score_conversation(&turns(&[text, text]));

        // 95 per message
        assert_eq!(result.score, 100);
        assert_eq!(result.qualification, Qualification::High);
        assert_eq!(result.signals.len(), 5);
    }

    #[test]
    fn test_tier_boundaries() {
        let config = ScoringConfig::default();
        assert_eq!(config.qualify(39), Qualification::Low);
        assert_eq!(config.qualify(40), Qualification::Medium);
        assert_eq!(config.qualify(69), Qualification::Medium);
        assert_eq!(config.qualify(70), Qualification::High);
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert_eq!(score_message("URGENTE").score, 15);
        assert_eq!(score_message("ESCRITÓRIO").score, 10);
    }

    #[test]
    fn test_custom_weights() {
        let scorer = LeadScorer::new(ScoringConfig {
            weights: ScoringWeights {
                price: 50,
                ..ScoringWeights::default()
            },
            ..ScoringConfig::default()
        });

        let result = scorer.score_message("quanto custa?");
        assert_eq!(result.score, 50);
        assert_eq!(result.qualification, Qualification::Medium);
    }

    #[test]
    fn test_turn_deserializes_with_optional_timestamp() {
        let parsed: Vec<ConversationTurn> = serde_json::from_str(
            r#"[{"text": "oi"}, {"text": "preço?", "timestamp": "2024-05-01T12:00:00Z"}]"#,
        )
        .unwrap();

        assert_eq!(parsed[0].timestamp, None);
        assert!(parsed[1].timestamp.is_some());
    }

    #[test]
    fn test_maximum_weights_over_long_conversation_stay_capped() {
        let scorer = LeadScorer::new(ScoringConfig {
            weights: ScoringWeights {
                price: u8::MAX,
                scheduling: u8::MAX,
                urgency: u8::MAX,
                organization: u8::MAX,
                immediacy: u8::MAX,
            },
            ..ScoringConfig::default()
        });
        let turn = ConversationTurn::new("preço da demo urgente para a empresa agora");
        let turns = vec![turn; 50_000];
        let result = scorer.score_conversation(&turns);

        assert_eq!(result.score, 100);
        assert_eq!(result.qualification, Qualification::High);
        assert_eq!(result.signals.len(), LeadSignal::ALL.len());
        assert_eq!(result.messages_scored, 50_000);
    }

    #[test]
    fn test_score_serializes_signal_names() {
        let result = score_message("preciso disso agora");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["qualification"], "low");
        assert_eq!(json["signals"], serde_json::json!(["urgency", "immediacy"]));
        assert_eq!(json["score"], 35);
    }
}
