//! Entity types and structures for entity extraction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of entities that can be extracted from a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Email addresses (e.g., "cliente@empresa.com.br")
    Email,
    /// Brazilian phone numbers (e.g., "(11) 98765-4321")
    Phone,
    /// CPF, the 11-digit individual taxpayer id (e.g., "529.982.247-25")
    TaxIdPerson,
    /// CNPJ, the 14-digit company taxpayer id (e.g., "11.222.333/0001-81")
    TaxIdCompany,
    /// Real amounts (e.g., "R$ 10.000,00")
    MonetaryAmount,
    /// Deadline mentions in days (e.g., "15 dias")
    DeadlineMention,
    /// Unified judicial process numbers (e.g., "0001234-56.2023.8.26.0100")
    ProcessNumber,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Email,
        EntityKind::Phone,
        EntityKind::TaxIdPerson,
        EntityKind::TaxIdCompany,
        EntityKind::MonetaryAmount,
        EntityKind::DeadlineMention,
        EntityKind::ProcessNumber,
    ];

    /// Get a string representation of the entity kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Email => "email",
            EntityKind::Phone => "phone",
            EntityKind::TaxIdPerson => "tax_id_person",
            EntityKind::TaxIdCompany => "tax_id_company",
            EntityKind::MonetaryAmount => "monetary_amount",
            EntityKind::DeadlineMention => "deadline_mention",
            EntityKind::ProcessNumber => "process_number",
        }
    }

    /// Priority when two matches overlap; the higher one is kept.
    ///
    /// An email claims its whole token, digits in the local part included.
    /// Among the numeric formats, the more digits one pins down, the more
    /// specific it is.
    pub fn overlap_priority(&self) -> u8 {
        match self {
            EntityKind::Email => 110,
            EntityKind::ProcessNumber => 100,
            EntityKind::TaxIdCompany => 90,
            EntityKind::TaxIdPerson => 80,
            EntityKind::MonetaryAmount => 60,
            EntityKind::Phone => 50,
            EntityKind::DeadlineMention => 40,
        }
    }

    /// Whether entities of this kind carry a checksum validity flag.
    pub fn has_checksum(&self) -> bool {
        matches!(self, EntityKind::TaxIdPerson | EntityKind::TaxIdCompany)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "email" => Ok(EntityKind::Email),
            "phone" => Ok(EntityKind::Phone),
            "tax_id_person" | "cpf" => Ok(EntityKind::TaxIdPerson),
            "tax_id_company" | "cnpj" => Ok(EntityKind::TaxIdCompany),
            "monetary_amount" | "amount" => Ok(EntityKind::MonetaryAmount),
            "deadline_mention" | "deadline" => Ok(EntityKind::DeadlineMention),
            "process_number" | "process" => Ok(EntityKind::ProcessNumber),
            _ => Err(format!("Unknown entity kind: {}", s)),
        }
    }
}

/// Normalized value of an extracted entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum EntityValue {
    /// Normalized text: lower-cased email, digits-only phone or tax id,
    /// verbatim process number
    Text(String),
    /// Monetary amount with the decimal comma converted to a point
    Amount(Decimal),
    /// Number of days in a deadline mention
    Days(u32),
}

impl fmt::Display for EntityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityValue::Text(text) => f.write_str(text),
            EntityValue::Amount(amount) => write!(f, "{}", amount),
            EntityValue::Days(days) => write!(f, "{}", days),
        }
    }
}

/// An entity extracted from text content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractedEntity {
    /// The matched text, verbatim
    pub text: String,
    /// The kind of entity detected
    pub kind: EntityKind,
    /// Normalized value
    pub value: EntityValue,
    /// Checksum verdict; only set for CPF and CNPJ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    /// Starting byte offset in the source text
    pub start_pos: usize,
    /// Ending byte offset (exclusive) in the source text
    pub end_pos: usize,
    /// Confidence score (0.0 to 1.0) indicating how certain the extractor is
    pub confidence: f32,
    /// Source extractor that detected this entity
    pub extractor_source: String,
}

impl ExtractedEntity {
    /// Create a new extracted entity.
    pub fn new(
        text: String,
        kind: EntityKind,
        value: EntityValue,
        start_pos: usize,
        end_pos: usize,
        confidence: f32,
        extractor_source: String,
    ) -> Self {
        Self {
            text,
            kind,
            value,
            valid: None,
            start_pos,
            end_pos,
            confidence,
            extractor_source,
        }
    }

    /// Attach a checksum verdict.
    pub fn with_validity(mut self, valid: bool) -> Self {
        self.valid = Some(valid);
        self
    }

    /// The amount, for monetary entities.
    pub fn amount(&self) -> Option<Decimal> {
        match self.value {
            EntityValue::Amount(amount) => Some(amount),
            _ => None,
        }
    }

    /// The number of days, for deadline mentions.
    pub fn days(&self) -> Option<u32> {
        match self.value {
            EntityValue::Days(days) => Some(days),
            _ => None,
        }
    }

    /// True unless a checksum was computed and failed.
    pub fn is_valid(&self) -> bool {
        self.valid.unwrap_or(true)
    }

    /// Get the length of the entity text in bytes.
    pub fn len(&self) -> usize {
        self.end_pos - self.start_pos
    }

    /// Check if the entity text is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether two entities share at least one byte of source text.
    pub fn overlaps(&self, other: &ExtractedEntity) -> bool {
        self.start_pos < other.end_pos && self.end_pos > other.start_pos
    }

    /// Get a formatted string representation of the entity.
    pub fn format(&self) -> String {
        let validity = match self.valid {
            Some(true) => " valid",
            Some(false) => " invalid",
            None => "",
        };
        format!(
            "{} [{}{}] = {} (confidence: {:.2}, source: {})",
            self.text,
            self.kind.as_str(),
            validity,
            self.value,
            self.confidence,
            self.extractor_source
        )
    }
}
