//! Single-intent detection for response routing.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::keywords::{
    CONTACT_KEYWORDS, DEADLINE_KEYWORDS, GREETING_KEYWORDS, HELP_KEYWORDS,
    INTENT_SCHEDULING_KEYWORDS, PRICING_KEYWORDS, SEARCH_KEYWORDS, STOP_WORDS, count_occurrences,
};

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(r"\w+").expect("word pattern compiles");
}

/// Closed set of intent categories. Declaration order breaks ties.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    Greeting,
    Help,
    Search,
    Scheduling,
    Deadline,
    Pricing,
    Contact,
}

impl IntentCategory {
    pub const ALL: [IntentCategory; 7] = [
        IntentCategory::Greeting,
        IntentCategory::Help,
        IntentCategory::Search,
        IntentCategory::Scheduling,
        IntentCategory::Deadline,
        IntentCategory::Pricing,
        IntentCategory::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentCategory::Greeting => "greeting",
            IntentCategory::Help => "help",
            IntentCategory::Search => "search",
            IntentCategory::Scheduling => "scheduling",
            IntentCategory::Deadline => "deadline",
            IntentCategory::Pricing => "pricing",
            IntentCategory::Contact => "contact",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            IntentCategory::Greeting => GREETING_KEYWORDS,
            IntentCategory::Help => HELP_KEYWORDS,
            IntentCategory::Search => SEARCH_KEYWORDS,
            IntentCategory::Scheduling => INTENT_SCHEDULING_KEYWORDS,
            IntentCategory::Deadline => DEADLINE_KEYWORDS,
            IntentCategory::Pricing => PRICING_KEYWORDS,
            IntentCategory::Contact => CONTACT_KEYWORDS,
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-matching intent and its confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Intent {
    pub category: IntentCategory,
    pub confidence: f32,
}

impl Intent {
    /// Whether any keyword matched at all.
    pub fn is_match(&self) -> bool {
        self.confidence > 0.0
    }
}

/// Lower-case `text`, split it into `\w+` runs and drop stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !STOP_WORDS.contains(*token))
        .map(str::to_string)
        .collect()
}

/// Classifies a message into one [`IntentCategory`].
///
/// Each category scores its keyword occurrences in the lower-cased text
/// divided by the number of tokens. Keywords are counted in the text rather
/// than the token list, so multi-word keywords such as `bom dia` count too.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Per-category scores, in declaration order.
    pub fn category_scores(&self, text: &str) -> Vec<(IntentCategory, f32)> {
        let token_count = tokenize(text).len();
        let lowered = text.to_lowercase();

        IntentCategory::ALL
            .into_iter()
            .map(|category| {
                let score = if token_count == 0 {
                    0.0
                } else {
                    count_occurrences(&lowered, category.keywords()) as f32 / token_count as f32
                };
                (category, score)
            })
            .collect()
    }

    pub fn detect(&self, text: &str) -> Intent {
        let mut best = Intent {
            category: IntentCategory::Greeting,
            confidence: 0.0,
        };

        // strict comparison keeps the first declared category on ties
        for (category, score) in self.category_scores(text) {
            if score > best.confidence {
                best = Intent {
                    category,
                    confidence: score,
                };
            }
        }

        // overlapping keywords can count more occurrences than tokens
        best.confidence = best.confidence.min(1.0);

        tracing::trace!(category = %best.category, confidence = best.confidence, "detected intent");

        best
    }
}

/// Detect the intent of a message.
pub fn detect_intent(text: &str) -> Intent {
    IntentClassifier::new().detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_stop_words() {
        assert_eq!(
            tokenize("Olá, preciso de uma consulta para o processo!"),
            vec!["olá", "preciso", "consulta", "processo"]
        );
        assert!(tokenize("").is_empty());
        assert!(tokenize("de a o").is_empty());
    }

    #[test]
    fn test_greeting() {
        let intent = detect_intent("oi, bom dia");
        assert_eq!(intent.category, IntentCategory::Greeting);
        assert!(intent.confidence > 0.0);
        assert!((intent.confidence - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_pricing() {
        let intent = detect_intent("Quanto custa o plano mensal?");
        assert_eq!(intent.category, IntentCategory::Pricing);
        assert!(intent.is_match());
    }

    #[test]
    fn test_search() {
        let intent = detect_intent("quero consultar meu processo trabalhista");
        assert_eq!(intent.category, IntentCategory::Search);
        assert!((intent.confidence - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_contact() {
        assert_eq!(
            detect_intent("me passa o telefone ou whatsapp").category,
            IntentCategory::Contact
        );
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        // one scheduling keyword, one deadline keyword
        let intent = detect_intent("marcar vencimento");
        assert_eq!(intent.category, IntentCategory::Scheduling);
        assert!((intent.confidence - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_no_match_is_first_category_with_zero() {
        let intent = detect_intent("xyz");
        assert_eq!(intent.category, IntentCategory::Greeting);
        assert_eq!(intent.confidence, 0.0);
        assert!(!intent.is_match());

        let empty = detect_intent("");
        assert_eq!(empty.category, IntentCategory::Greeting);
        assert_eq!(empty.confidence, 0.0);
    }

    #[test]
    fn test_confidence_is_clamped() {
        // "ajudar" counts for both "ajuda" and "ajudar" over a single token
        let intent = detect_intent("ajudar");
        assert_eq!(intent.category, IntentCategory::Help);
        assert_eq!(intent.confidence, 1.0);
    }

    #[test]
    fn test_category_scores_cover_every_category() {
        let scores = IntentClassifier::new().category_scores("oi");
        assert_eq!(scores.len(), IntentCategory::ALL.len());
        assert_eq!(scores[0], (IntentCategory::Greeting, 1.0));
    }
}
