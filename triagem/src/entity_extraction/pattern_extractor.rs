//! Pattern-based entity extractor using regular expressions.
//!
//! Every `extract_*` function is pure and total: it scans the whole text and
//! returns its matches left to right, or nothing. Offsets are byte offsets
//! into the input.

use lazy_static::lazy_static;
use regex::{Match, Regex};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::post_processors::{EntityDeduplicator, OverlapResolver};
use super::validators::{digits_only, validate_cnpj, validate_cpf};
use super::{
    EntityExtractionConfig, EntityExtractor, EntityKind, EntityPostProcessor, EntityValue,
    ExtractedEntity,
};

/// Name recorded as `extractor_source` on every entity found here.
pub const PATTERN_EXTRACTOR_NAME: &str = "pattern";

// Digit classes are `[0-9]`: `\d` is Unicode-aware and normalized values keep
// ASCII digits only.
lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("email pattern compiles");

    // (DD) area code, 4-5 digit prefix, optional separator, 4 digit suffix
    static ref PHONE_REGEX: Regex =
        Regex::new(r"(?:\([0-9]{2}\)\s?)?\b[0-9]{4,5}[-\s]?[0-9]{4}\b")
            .expect("phone pattern compiles");

    // R$ then digits with optional `.` thousands groups and a decimal comma
    static ref AMOUNT_REGEX: Regex =
        Regex::new(r"R\$\s*([0-9]+(?:\.[0-9]{3})*(?:,[0-9]{1,2})?)")
            .expect("amount pattern compiles");

    static ref DEADLINE_REGEX: Regex =
        Regex::new(r"(?i)\b([0-9]{1,5})\s*(?:dias|dia|d)\b")
            .expect("deadline pattern compiles");

    static ref CPF_REGEX: Regex =
        Regex::new(r"\b[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}\b")
            .expect("cpf pattern compiles");

    static ref CNPJ_REGEX: Regex =
        Regex::new(r"\b[0-9]{2}\.?[0-9]{3}\.?[0-9]{3}/?[0-9]{4}-?[0-9]{2}\b")
            .expect("cnpj pattern compiles");

    // NNNNNNN-DD.AAAA.J.TR.OOOO
    static ref PROCESS_NUMBER_REGEX: Regex =
        Regex::new(r"\b[0-9]{7}-[0-9]{2}\.[0-9]{4}\.[0-9]\.[0-9]{2}\.[0-9]{4}\b")
            .expect("process number pattern compiles");
}

fn entity(m: Match<'_>, kind: EntityKind, value: EntityValue, confidence: f32) -> ExtractedEntity {
    ExtractedEntity::new(
        m.as_str().to_string(),
        kind,
        value,
        m.start(),
        m.end(),
        confidence,
        PATTERN_EXTRACTOR_NAME.to_string(),
    )
}

/// Extract email addresses. Duplicates are preserved; values are lower-cased.
pub fn extract_emails(text: &str) -> Vec<ExtractedEntity> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| {
            let value = EntityValue::Text(m.as_str().to_lowercase());
            entity(m, EntityKind::Email, value, 0.95)
        })
        .collect()
}

/// Extract Brazilian phone numbers. Format only; values are digits only.
pub fn extract_phones(text: &str) -> Vec<ExtractedEntity> {
    PHONE_REGEX
        .find_iter(text)
        .map(|m| {
            let value = EntityValue::Text(digits_only(m.as_str()));
            entity(m, EntityKind::Phone, value, 0.80)
        })
        .collect()
}

/// Turn `10.000,00` into `10000.00`.
fn parse_brl_amount(raw: &str) -> Option<Decimal> {
    let normalized = raw.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Extract `R$` amounts as decimal values.
pub fn extract_amounts(text: &str) -> Vec<ExtractedEntity> {
    AMOUNT_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let digits = caps.get(1)?;
            match parse_brl_amount(digits.as_str()) {
                Some(amount) => Some(entity(
                    whole,
                    EntityKind::MonetaryAmount,
                    EntityValue::Amount(amount),
                    0.90,
                )),
                None => {
                    tracing::debug!(raw = digits.as_str(), "amount out of decimal range, skipped");
                    None
                }
            }
        })
        .collect()
}

/// Extract deadline mentions such as `15 dias` or `5d` as day counts.
pub fn extract_deadlines(text: &str) -> Vec<ExtractedEntity> {
    DEADLINE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let days = caps.get(1)?.as_str().parse::<u32>().ok()?;
            Some(entity(
                whole,
                EntityKind::DeadlineMention,
                EntityValue::Days(days),
                0.75,
            ))
        })
        .collect()
}

fn extract_tax_ids(
    text: &str,
    regex: &Regex,
    kind: EntityKind,
    validate: fn(&str) -> bool,
) -> Vec<ExtractedEntity> {
    regex
        .find_iter(text)
        .map(|m| {
            let valid = validate(m.as_str());
            let confidence = if valid { 0.95 } else { 0.50 };
            let value = EntityValue::Text(digits_only(m.as_str()));
            entity(m, kind, value, confidence).with_validity(valid)
        })
        .collect()
}

/// Extract CPF candidates (`ddd.ddd.ddd-dd` or 11 bare digits) with their
/// checksum verdict.
pub fn extract_cpfs(text: &str) -> Vec<ExtractedEntity> {
    extract_tax_ids(text, &CPF_REGEX, EntityKind::TaxIdPerson, validate_cpf)
}

/// Extract CNPJ candidates (`dd.ddd.ddd/dddd-dd` or 14 bare digits) with
/// their checksum verdict.
pub fn extract_cnpjs(text: &str) -> Vec<ExtractedEntity> {
    extract_tax_ids(text, &CNPJ_REGEX, EntityKind::TaxIdCompany, validate_cnpj)
}

/// First judicial process number in the text, verbatim.
pub fn extract_process_number(text: &str) -> Option<String> {
    PROCESS_NUMBER_REGEX
        .find(text)
        .map(|m| m.as_str().to_string())
}

/// Every judicial process number in the text.
pub fn extract_process_numbers(text: &str) -> Vec<ExtractedEntity> {
    PROCESS_NUMBER_REGEX
        .find_iter(text)
        .map(|m| {
            let value = EntityValue::Text(m.as_str().to_string());
            entity(m, EntityKind::ProcessNumber, value, 0.98)
        })
        .collect()
}

/// Run the extractor for a single kind.
pub fn extract_kind(text: &str, kind: EntityKind) -> Vec<ExtractedEntity> {
    match kind {
        EntityKind::Email => extract_emails(text),
        EntityKind::Phone => extract_phones(text),
        EntityKind::TaxIdPerson => extract_cpfs(text),
        EntityKind::TaxIdCompany => extract_cnpjs(text),
        EntityKind::MonetaryAmount => extract_amounts(text),
        EntityKind::DeadlineMention => extract_deadlines(text),
        EntityKind::ProcessNumber => extract_process_numbers(text),
    }
}

/// Run every extractor, drop overlapping matches and order by position.
pub fn extract_all(text: &str) -> Vec<ExtractedEntity> {
    PatternEntityExtractor::new().extract_entities(text)
}

/// Pattern-based entity extractor applying an [`EntityExtractionConfig`].
#[derive(Debug, Clone)]
pub struct PatternEntityExtractor {
    name: String,
    config: EntityExtractionConfig,
}

impl PatternEntityExtractor {
    /// Create an extractor for every entity kind.
    pub fn new() -> Self {
        Self::with_config(EntityExtractionConfig::default())
    }

    /// Create an extractor with custom configuration.
    pub fn with_config(config: EntityExtractionConfig) -> Self {
        Self {
            name: PATTERN_EXTRACTOR_NAME.to_string(),
            config,
        }
    }

    /// The configuration this extractor applies.
    pub fn config(&self) -> &EntityExtractionConfig {
        &self.config
    }
}

impl EntityExtractor for PatternEntityExtractor {
    fn extract_entities(&self, content: &str) -> Vec<ExtractedEntity> {
        if content.is_empty() {
            return Vec::new();
        }

        let mut entities: Vec<ExtractedEntity> = self
            .config
            .enabled_kinds
            .iter()
            .flat_map(|&kind| extract_kind(content, kind))
            .collect();

        entities.retain(|entity| entity.confidence >= self.config.confidence_threshold);

        if self.config.resolve_overlaps {
            entities = OverlapResolver::new().process(entities);
        }

        if self.config.deduplicate {
            entities = EntityDeduplicator::new().process(entities);
        }

        entities.sort_by_key(|entity| entity.start_pos);

        if let Some(max) = self.config.max_entities {
            entities.truncate(max);
        }

        tracing::debug!(
            extractor = %self.name,
            count = entities.len(),
            "extracted entities"
        );

        entities
    }

    fn supported_kinds(&self) -> Vec<EntityKind> {
        self.config.enabled_kinds.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        100
    }
}

impl Default for PatternEntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
