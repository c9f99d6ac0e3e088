//! Entity extraction for Brazilian business messages.
//!
//! Pattern extractors recognize emails, phones, CPF and CNPJ tax ids,
//! `R$` amounts, deadline mentions and judicial process numbers. CPF and
//! CNPJ matches carry the result of their mod-11 checksum.

pub mod config;
pub mod pattern_extractor;
pub mod post_processors;
pub mod traits;
pub mod types;
pub mod validators;

pub use config::EntityExtractionConfig;
pub use pattern_extractor::{
    PATTERN_EXTRACTOR_NAME, PatternEntityExtractor, extract_all, extract_amounts, extract_cnpjs,
    extract_cpfs, extract_deadlines, extract_emails, extract_kind, extract_phones,
    extract_process_number, extract_process_numbers,
};
pub use post_processors::{EntityDeduplicator, OverlapResolver};
pub use traits::{EntityExtractor, EntityPostProcessor};
pub use types::{EntityKind, EntityValue, ExtractedEntity};
pub use validators::{digits_only, validate_cnpj, validate_cpf};
