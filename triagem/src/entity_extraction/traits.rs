//! Traits for entity extraction functionality.

use super::{EntityKind, ExtractedEntity};

/// Trait for extracting entities from text content.
///
/// Extraction is total: a text with nothing recognizable yields an empty
/// vector, never an error.
pub trait EntityExtractor: Send + Sync + std::fmt::Debug {
    /// Extract entities from the given text content.
    ///
    /// # Arguments
    /// * `content` - The text content to analyze for entities
    ///
    /// # Returns
    /// The extracted entities, ordered by their position in `content`
    fn extract_entities(&self, content: &str) -> Vec<ExtractedEntity>;

    /// Get the entity kinds supported by this extractor.
    fn supported_kinds(&self) -> Vec<EntityKind>;

    /// Get the name of this extractor for identification purposes.
    fn name(&self) -> &str;

    /// Get the priority of this extractor (higher priority extractors run first).
    fn priority(&self) -> u8 {
        128
    }

    /// Check if this extractor is enabled.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Generic trait for post-processing extracted entities
pub trait EntityPostProcessor: Send + Sync + std::fmt::Debug {
    /// Process a list of entities
    fn process(&self, entities: Vec<ExtractedEntity>) -> Vec<ExtractedEntity>;

    /// Get the name of this post-processor
    fn name(&self) -> &str;
}
