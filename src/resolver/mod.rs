//! Term resolution: free text → ranked canonical candidates.
//!
//! Three passes run in order over the [`AliasIndex`](crate::alias::AliasIndex):
//!
//! 1. exact alias (term equals a registered alias)
//! 2. partial alias (term and alias contain one another)
//! 3. category mapping (term matches a category, whose fragments are matched against names)
//!
//! An entity keeps the match from the first pass that found it. Priorities come from a single
//! [`PriorityTable`]; the output is sorted by priority and capped at
//! [`MAX_CANDIDATES`](crate::constants::MAX_CANDIDATES).

pub mod entity_resolver;
pub mod priority;
pub mod types;

#[cfg(test)]
mod tests;

pub use entity_resolver::EntityResolver;
pub use priority::{
    EXACT_ALIAS_PRIORITY, EXACT_MAPPING_PRIORITY, FragmentOverride, PARTIAL_ALIAS_PRIORITY,
    PARTIAL_MAPPING_PRIORITY, PriorityTable,
};
pub use types::{Candidate, MatchType};
