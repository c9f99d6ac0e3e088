//! Engine façade for Triagem
//!
//! [`TriagemEngine`] is built once from a [`TriagemConfig`] and composes the
//! sanitizer, the entity extractor and the scorers behind one value. It holds
//! no mutable state, so a single engine can be shared across threads.

use serde::{Deserialize, Serialize};

use crate::config::TriagemConfig;
use crate::entity_extraction::{EntityExtractor, ExtractedEntity, PatternEntityExtractor};
use crate::sanitizer::Sanitizer;
use crate::scoring::{ConversationTurn, Intent, IntentClassifier, IntentScore, LeadScorer};

/// Everything the engine learns from one message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageAnalysis {
    /// Markdown-safe rendering of the message
    pub sanitized: String,
    /// Entities found in the original text; offsets refer to that text
    pub entities: Vec<ExtractedEntity>,
    pub intent: Intent,
    /// Lead score of the message taken on its own
    pub lead: IntentScore,
}

/// The primary interface to the normalization engine.
#[derive(Debug, Clone)]
pub struct TriagemEngine {
    sanitizer: Sanitizer,
    extractor: PatternEntityExtractor,
    scorer: LeadScorer,
    classifier: IntentClassifier,
    config: TriagemConfig,
}

impl TriagemEngine {
    /// Create an engine from an already validated configuration.
    pub fn new(config: TriagemConfig) -> Self {
        Self {
            sanitizer: Sanitizer::new(config.sanitizer.clone()),
            extractor: PatternEntityExtractor::with_config(config.extraction.clone()),
            scorer: LeadScorer::new(config.scoring.clone()),
            classifier: IntentClassifier::new(),
            config,
        }
    }

    /// Get the configuration the engine was built from.
    pub fn config(&self) -> &TriagemConfig {
        &self.config
    }

    pub fn sanitize(&self, text: &str) -> String {
        self.sanitizer.sanitize(text)
    }

    pub fn sanitize_bytes(&self, bytes: &[u8]) -> String {
        self.sanitizer.sanitize_bytes(bytes)
    }

    pub fn sanitize_value(&self, value: &serde_json::Value) -> String {
        self.sanitizer.sanitize_value(value)
    }

    /// Extract entities with the configured kinds and filters.
    pub fn extract(&self, text: &str) -> Vec<ExtractedEntity> {
        self.extractor.extract_entities(text)
    }

    pub fn score_conversation(&self, turns: &[ConversationTurn]) -> IntentScore {
        self.scorer.score_conversation(turns)
    }

    pub fn score_message(&self, text: &str) -> IntentScore {
        self.scorer.score_message(text)
    }

    pub fn detect_intent(&self, text: &str) -> Intent {
        self.classifier.detect(text)
    }

    /// Run every component over one message.
    ///
    /// Extraction and scoring read the original text; escaping would
    /// otherwise shift offsets and split emails such as `nome_sobrenome@`.
    pub fn analyze(&self, text: &str) -> MessageAnalysis {
        let analysis = MessageAnalysis {
            sanitized: self.sanitize(text),
            entities: self.extract(text),
            intent: self.detect_intent(text),
            lead: self.score_message(text),
        };

        tracing::debug!(
            entities = analysis.entities.len(),
            intent = %analysis.intent.category,
            score = analysis.lead.score,
            "analyzed message"
        );

        analysis
    }
}

impl Default for TriagemEngine {
    fn default() -> Self {
        Self::new(TriagemConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::entity_extraction::EntityKind;
    use crate::scoring::{IntentCategory, Qualification};

    #[test]
    fn test_analyze_combines_components() {
        let engine = TriagemEngine::default();
        let analysis = engine.analyze("Qual o preço? Meu email é maria_souza@adv.com.br");

        assert_eq!(
            analysis.sanitized,
            "Qual o preço? Meu email é maria\\_souza@adv.com.br"
        );
        assert_eq!(analysis.entities.len(), 1);
        assert_eq!(analysis.entities[0].kind, EntityKind::Email);
        assert_eq!(analysis.entities[0].text, "maria_souza@adv.com.br");
        assert_eq!(analysis.intent.category, IntentCategory::Pricing);
        assert_eq!(analysis.lead.score, 20);
        assert_eq!(analysis.lead.qualification, Qualification::Low);
    }

    #[test]
    fn test_engine_applies_configuration() {
        let config = ConfigBuilder::new()
            .without_markdown_escaping()
            .with_entity_kinds(vec![EntityKind::MonetaryAmount])
            .build()
            .unwrap();
        let engine = TriagemEngine::new(config);

        assert_eq!(engine.sanitize("*negrito*"), "*negrito*");

        let entities = engine.extract("a@b.com R$ 150,00");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].kind, EntityKind::MonetaryAmount);
    }

    #[test]
    fn test_empty_message() {
        let analysis = TriagemEngine::default().analyze("");
        assert!(analysis.sanitized.is_empty());
        assert!(analysis.entities.is_empty());
        assert_eq!(analysis.intent.confidence, 0.0);
        assert_eq!(analysis.lead.score, 0);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TriagemEngine>();
    }
}
