use serde::Serialize;

use crate::alias::{Entity, EntityId, EntityKind};

/// How a candidate was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Term equals a registered alias.
    ExactAlias,
    /// Term and a registered alias contain one another.
    PartialAlias,
    /// A category fragment equals the canonical name.
    ExactMapping,
    /// A category fragment is contained in the canonical name.
    PartialMapping,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::ExactAlias => "exact_alias",
            MatchType::PartialAlias => "partial_alias",
            MatchType::ExactMapping => "exact_mapping",
            MatchType::PartialMapping => "partial_mapping",
        }
    }
}

/// A possible canonical entity for a free-text term. Recomputed per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub entity: Entity,
    /// The alias or category term that produced this match.
    pub matched_alias: String,
    pub match_type: MatchType,
    pub priority: u32,
}

impl Candidate {
    pub fn id(&self) -> EntityId {
        self.entity.id
    }

    pub fn name(&self) -> &str {
        &self.entity.name
    }

    pub fn kind(&self) -> EntityKind {
        self.entity.kind
    }
}
