//! Post-processors applied to extracted entities.

pub mod deduplicator;
pub mod overlap;

pub use deduplicator::EntityDeduplicator;
pub use overlap::OverlapResolver;
