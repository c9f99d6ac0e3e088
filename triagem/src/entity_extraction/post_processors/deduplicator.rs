//! Entity deduplicator for removing repeated entities.

use crate::entity_extraction::{EntityKind, EntityPostProcessor, EntityValue, ExtractedEntity};
use std::collections::HashSet;

/// Keeps the first entity for each kind and normalized value.
///
/// Values are already normalized by the extractors (lower-cased emails,
/// digits-only phones and tax ids), so `(11) 3456-7890` and `11 3456 7890`
/// collapse into one phone.
#[derive(Debug, Clone)]
pub struct EntityDeduplicator {
    name: String,
}

impl EntityDeduplicator {
    /// Create a new entity deduplicator
    pub fn new() -> Self {
        Self {
            name: "entity_deduplicator".to_string(),
        }
    }
}

impl Default for EntityDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityPostProcessor for EntityDeduplicator {
    fn process(&self, entities: Vec<ExtractedEntity>) -> Vec<ExtractedEntity> {
        let mut seen: HashSet<(EntityKind, EntityValue)> = HashSet::new();
        let before = entities.len();

        let result: Vec<ExtractedEntity> = entities
            .into_iter()
            .filter(|entity| seen.insert((entity.kind, entity.value.clone())))
            .collect();

        if result.len() < before {
            tracing::trace!(removed = before - result.len(), "deduplicated entities");
        }

        result
    }

    fn name(&self) -> &str {
        &self.name
    }
}
