//! Configuration for entity extraction functionality.

use super::EntityKind;
use serde::{Deserialize, Serialize};

/// Configuration for entity extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EntityExtractionConfig {
    /// Entity kinds to look for
    pub enabled_kinds: Vec<EntityKind>,
    /// Minimum confidence for an entity to be kept
    pub confidence_threshold: f32,
    /// Drop overlapping matches, keeping the more specific kind
    pub resolve_overlaps: bool,
    /// Collapse entities with the same kind and normalized value
    pub deduplicate: bool,
    /// Maximum number of entities returned per text (None for unlimited)
    pub max_entities: Option<usize>,
}

impl Default for EntityExtractionConfig {
    fn default() -> Self {
        Self {
            enabled_kinds: EntityKind::ALL.to_vec(),
            // Invalid tax ids are still reported; their flag carries the verdict
            confidence_threshold: 0.0,
            resolve_overlaps: true,
            deduplicate: false,
            max_entities: None,
        }
    }
}

impl EntityExtractionConfig {
    /// Whether the given kind is enabled.
    pub fn is_enabled(&self, kind: EntityKind) -> bool {
        self.enabled_kinds.contains(&kind)
    }
}
