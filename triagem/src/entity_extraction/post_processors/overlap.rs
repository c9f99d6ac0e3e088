//! Overlap resolution between entities of different kinds.

use crate::entity_extraction::{EntityPostProcessor, ExtractedEntity};

/// Drops entities that share source text with a more specific one.
///
/// On overlap the entity whose kind has the higher
/// [`overlap_priority`](crate::entity_extraction::EntityKind::overlap_priority)
/// wins; equal priorities fall back to confidence, then to the earlier match.
/// The result is ordered by start position.
#[derive(Debug, Clone)]
pub struct OverlapResolver {
    name: String,
}

impl OverlapResolver {
    pub fn new() -> Self {
        Self {
            name: "overlap_resolver".to_string(),
        }
    }

    fn beats(candidate: &ExtractedEntity, existing: &ExtractedEntity) -> bool {
        let candidate_priority = candidate.kind.overlap_priority();
        let existing_priority = existing.kind.overlap_priority();

        candidate_priority > existing_priority
            || (candidate_priority == existing_priority
                && candidate.confidence > existing.confidence)
    }
}

impl Default for OverlapResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityPostProcessor for OverlapResolver {
    fn process(&self, mut entities: Vec<ExtractedEntity>) -> Vec<ExtractedEntity> {
        entities.sort_by_key(|entity| entity.start_pos);

        let mut result: Vec<ExtractedEntity> = Vec::with_capacity(entities.len());

        for entity in entities {
            let wins_all = result
                .iter()
                .filter(|existing| existing.overlaps(&entity))
                .all(|existing| Self::beats(&entity, existing));

            if wins_all {
                result.retain(|existing| !existing.overlaps(&entity));
                result.push(entity);
            }
        }

        result
    }

    fn name(&self) -> &str {
        &self.name
    }
}
