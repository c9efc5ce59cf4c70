use serde::Serialize;

use crate::alias::{Entity, EntityId, EntityKind};
use crate::resolver::Candidate;
use crate::scoring::Scored;

/// One scored `(liquor, ingredient)` candidate pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combination {
    pub liquor: Candidate,
    pub ingredient: Candidate,
    #[serde(flatten)]
    pub score: Scored,
}

impl Combination {
    pub fn new(liquor: Candidate, ingredient: Candidate, raw_score: f64) -> Self {
        Self {
            liquor,
            ingredient,
            score: Scored::from_raw(raw_score),
        }
    }

    pub fn raw_score(&self) -> f64 {
        self.score.raw_score
    }

    pub fn normalized_score(&self) -> u8 {
        self.score.normalized_score
    }
}

/// Outcome of a two-term pairing search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Highest raw score among successfully scored pairs.
    pub best: Option<Combination>,
    /// Successful pairs by raw score, best first, at most [`MAX_RANKED`](crate::constants::MAX_RANKED).
    pub ranked: Vec<Combination>,
    /// Pairs the oracle scored successfully.
    pub tested_count: usize,
    /// Pairs sent to the oracle.
    pub attempted: usize,
    pub liquor_candidates: Vec<Candidate>,
    pub ingredient_candidates: Vec<Candidate>,
}

/// The fixed side of a batch: an entity id and the kind that decides call orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Anchor {
    pub id: EntityId,
    pub kind: EntityKind,
}

impl Anchor {
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self { id, kind }
    }

    /// `(liquor_id, ingredient_id)` for a call pairing this anchor with `partner`.
    pub fn orient(&self, partner: EntityId) -> (EntityId, EntityId) {
        match self.kind {
            EntityKind::Liquor => (self.id, partner),
            EntityKind::Ingredient => (partner, self.id),
        }
    }
}

/// Per-candidate outcome of a batch. Failures are kept so callers can tell "scored low" from
/// "failed to score".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchScore {
    pub candidate_id: EntityId,
    pub score: Option<f64>,
    pub normalized_score: Option<u8>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchScore {
    pub fn scored(candidate_id: EntityId, raw: f64) -> Self {
        Self {
            candidate_id,
            score: Some(raw),
            normalized_score: Some(crate::scoring::normalize(raw)),
            success: true,
            error: None,
        }
    }

    pub fn failed(candidate_id: EntityId, error: impl Into<String>) -> Self {
        Self {
            candidate_id,
            score: None,
            normalized_score: None,
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Where the partner ids of a recommendation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerSource {
    /// Configured sample ids.
    Configured,
    /// The oracle's entity listing.
    Oracle,
    /// The local alias index catalog.
    Catalog,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub partner: Entity,
    #[serde(flatten)]
    pub score: Scored,
}

/// Best partners of the opposite kind for one resolved term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSet {
    pub anchor: Candidate,
    pub partner_kind: EntityKind,
    pub partner_source: PartnerSource,
    pub tested_count: usize,
    pub attempted: usize,
    pub recommendations: Vec<Recommendation>,
}
